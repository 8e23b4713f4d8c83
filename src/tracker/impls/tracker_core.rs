use std::collections::HashMap;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;
use log::{debug, error};
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::database::enums::peer_status::PeerStatus;
use crate::database::structs::announce_record::AnnounceRecord;
use crate::database::structs::peer_entry::PeerEntry;
use crate::database::traits::persistence::Persistence;
use crate::file::structs::local_file::LocalFile;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::torrent::enums::torrent_error::TorrentError;
use crate::torrent::structs::torrent::Torrent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::tracker_core::TrackerCore;
use crate::{ben_bytes, ben_int, ben_map};

const LOG_PREFIX: &str = "[ANNOUNCE]";

/// Parameters every announce has to carry, in the order they are reported.
pub const REQUIRED_PARAMETERS: [&str; 6] = ["info_hash", "peer_id", "port", "uploaded", "downloaded", "left"];

pub const INTERNAL_FAILURE: &str = "Failed to announce because of internal server error.";

type Query = HashMap<String, Vec<Vec<u8>>>;

fn first<'a>(query: &'a Query, key: &str) -> Option<&'a [u8]>
{
    query.get(key).and_then(|values| values.first()).map(|value| value.as_slice())
}

fn parse_digits<T: FromStr>(value: &[u8]) -> Option<T>
{
    if value.is_empty() || !value.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(value).ok()?.parse::<T>().ok()
}

fn enabled(value: Option<&[u8]>) -> bool
{
    value == Some(&b"1"[..])
}

/// Bencoded `{"failure reason": reason}`.
pub fn failure_response(reason: &str) -> Vec<u8>
{
    ben_map! {
        "failure reason" => ben_bytes!(reason)
    }.encode()
}

impl TrackerCore {
    pub fn new(persistence: Arc<dyn Persistence>, stats: Arc<StatsAtomics>) -> TrackerCore
    {
        TrackerCore { persistence, stats }
    }

    /// Checks the raw query parameters. The error is the failure reason
    /// handed back to the client.
    pub fn validate_announce(&self, query: &Query, remote_ip: IpAddr) -> Result<AnnounceQueryRequest, String>
    {
        let missing: Vec<&str> = REQUIRED_PARAMETERS.iter()
            .copied()
            .filter(|key| first(query, key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(format!("Invalid get parameters; Missing: {}", missing.join(", ")));
        }
        let field = |key: &str| first(query, key).unwrap_or_default();

        let info_hash = InfoHash::try_from(field("info_hash"))
            .map_err(|_| String::from("Invalid length of info_hash."))?;
        let peer_id = PeerId::try_from(field("peer_id"))
            .map_err(|_| String::from("Invalid length of peer_id."))?;
        let port = parse_digits::<u16>(field("port"))
            .ok_or_else(|| String::from("Invalid port value."))?;
        let uploaded = parse_digits::<u64>(field("uploaded"))
            .ok_or_else(|| String::from("Invalid uploaded value."))?;
        let downloaded = parse_digits::<u64>(field("downloaded"))
            .ok_or_else(|| String::from("Invalid downloaded value."))?;
        let left = parse_digits::<u64>(field("left"))
            .ok_or_else(|| String::from("Invalid left value."))?;

        let remote_addr = match first(query, "ip") {
            None => remote_ip,
            Some(ip) => std::str::from_utf8(ip).ok()
                .and_then(|ip| IpAddr::from_str(ip).ok())
                .ok_or_else(|| String::from("Invalid ip value."))?
        };

        Ok(AnnounceQueryRequest {
            info_hash,
            peer_id,
            port,
            uploaded,
            downloaded,
            left,
            compact: enabled(first(query, "compact")),
            no_peer_id: enabled(first(query, "no_peer_id")),
            event: AnnounceEvent::from_query(first(query, "event")),
            remote_addr,
        })
    }

    /// Stores the announce and builds the response dictionary.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn handle_announce(&self, request: &AnnounceQueryRequest, interval: u64) -> Result<BencodeValue, TrackerError>
    {
        // Nothing left to download counts as complete even without a
        // `completed` event, unlike plain BEP 3 trackers.
        let status = match (request.event, request.left) {
            (AnnounceEvent::Completed, _) | (_, 0) => Some(PeerStatus::Complete),
            _ => None
        };
        let ttl = match request.event {
            AnnounceEvent::Stopped => 0,
            _ => interval.saturating_mul(2)
        };
        debug!("{} {} announced {} from {}:{} ({:?})", LOG_PREFIX, request.peer_id, request.info_hash, request.remote_addr, request.port, request.event);

        self.persistence.save_announce(AnnounceRecord {
            info_hash: request.info_hash,
            peer_id: request.peer_id,
            ip: request.remote_addr,
            port: request.port,
            uploaded: request.uploaded,
            downloaded: request.downloaded,
            left: request.left,
            status,
            ttl: Some(ttl),
        }).await?;

        let peers = self.persistence.get_peers(request.info_hash, request.peer_id).await?;
        let stats = self.persistence.get_peer_stats(request.info_hash, request.peer_id).await?;

        let peers = if request.compact {
            BencodeValue::Bytes(TrackerCore::compact_peers(&peers))
        } else {
            BencodeValue::List(peers.iter().map(|peer| TrackerCore::peer_dictionary(peer, request.no_peer_id)).collect())
        };

        Ok(ben_map! {
            "interval" => ben_int!(i64::try_from(interval).unwrap_or(i64::MAX)),
            "complete" => ben_int!(i64::try_from(stats.complete).unwrap_or(i64::MAX)),
            "incomplete" => ben_int!(i64::try_from(stats.incomplete).unwrap_or(i64::MAX)),
            "peers" => peers
        })
    }

    /// Full announce round trip. Always returns a bencoded dictionary.
    pub async fn announce(&self, query: &Query, remote_ip: IpAddr, interval: u64) -> Vec<u8>
    {
        let request = match self.validate_announce(query, remote_ip) {
            Ok(request) => request,
            Err(reason) => {
                debug!("{} Rejected announce from {}: {}", LOG_PREFIX, remote_ip, reason);
                self.stats.update_stats(StatsEvent::HttpFailure, 1);
                return failure_response(&reason);
            }
        };
        match self.handle_announce(&request, interval).await {
            Ok(response) => {
                match remote_ip {
                    IpAddr::V4(_) => self.stats.update_stats(StatsEvent::Tcp4AnnouncesHandled, 1),
                    IpAddr::V6(_) => self.stats.update_stats(StatsEvent::Tcp6AnnouncesHandled, 1)
                };
                response.encode()
            }
            Err(error) => {
                error!("{} Announce of {} failed: {}", LOG_PREFIX, request.info_hash, error);
                self.stats.update_stats(StatsEvent::HttpFailure, 1);
                failure_response(INTERNAL_FAILURE)
            }
        }
    }

    /// Registers a file as a torrent and returns its `.torrent` bytes.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn create_torrent(&self, announce_urls: &[String], file_path: &str, size_piece: u64, name: Option<String>) -> Result<Vec<u8>, TrackerError>
    {
        if announce_urls.is_empty() {
            return Err(TrackerError::Torrent(TorrentError::EmptyAnnounceList));
        }
        let file = LocalFile::open(file_path)?;
        let torrent = Arc::new(Torrent::new(Arc::new(file), size_piece, name)?);
        let torrent_file = torrent.create_torrent_file(announce_urls)?;
        self.persistence.save_torrent(torrent.clone()).await?;
        self.stats.update_stats(StatsEvent::TorrentsCreated, 1);
        debug!("{} Registered torrent {} for {}", LOG_PREFIX, torrent.info_hash()?, torrent.file_path());
        Ok(torrent_file)
    }

    /// 4 byte IPv4 address and 2 byte port per peer, both big endian.
    pub fn compact_peers(peers: &[PeerEntry]) -> Vec<u8>
    {
        let mut packed = Vec::with_capacity(peers.len() * 6);
        for peer in peers {
            if let IpAddr::V4(ip) = peer.ip {
                packed.extend_from_slice(&ip.octets());
                packed.extend_from_slice(&peer.port.to_be_bytes());
            }
        }
        packed
    }

    fn peer_dictionary(peer: &PeerEntry, no_peer_id: bool) -> BencodeValue
    {
        if no_peer_id {
            return ben_map! {
                "ip" => ben_bytes!(peer.ip.to_string()),
                "port" => ben_int!(peer.port)
            };
        }
        ben_map! {
            "peer id" => ben_bytes!(peer.peer_id.0),
            "ip" => ben_bytes!(peer.ip.to_string()),
            "port" => ben_int!(peer.port)
        }
    }
}
