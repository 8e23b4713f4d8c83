use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use byteorder::{ByteOrder, NetworkEndian};
use log::{debug, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::seeder::enums::connection_state::ConnectionState;
use crate::seeder::enums::message_id::MessageId;
use crate::seeder::enums::message_outcome::MessageOutcome;
use crate::seeder::seeder::{bitfield_message, handshake_message, piece_message, PROTOCOL_STRING, STOP_SEEDING, UNCHOKE_MESSAGE, UNKNOWN_INFO_HASH, UNSUPPORTED_PROTOCOL};
use crate::seeder::structs::connection_report::ConnectionReport;
use crate::seeder::structs::peer_connection::PeerConnection;
use crate::seeder::structs::peer_context::PeerContext;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

const LOG_PREFIX: &str = "[SEEDER]";

async fn with_timeout<T, F>(timeout: Option<Duration>, future: F) -> io::Result<T>
where
    F: Future<Output = io::Result<T>>
{
    match timeout {
        None => future.await,
        Some(duration) => tokio::time::timeout(duration, future).await
            .map_err(|_| io::Error::from(io::ErrorKind::TimedOut))?
    }
}

fn close(reason: &str) -> io::Result<MessageOutcome>
{
    Ok(MessageOutcome::CloseConnection(reason.to_string()))
}

impl<S: AsyncRead + AsyncWrite + Unpin + Send> PeerConnection<S> {
    pub fn new(stream: S, peer_addr: Option<SocketAddr>, context: Arc<PeerContext>) -> PeerConnection<S>
    {
        PeerConnection {
            stream,
            peer_addr,
            context,
            state: ConnectionState::AwaitingHandshake,
            torrent: None,
            remote_peer_id: None,
            bytes_sent: 0,
            bytes_received: 0,
            data_sent: 0,
        }
    }

    pub fn state(&self) -> ConnectionState
    {
        self.state
    }

    async fn read_bytes(&mut self, length: usize) -> io::Result<Vec<u8>>
    {
        let mut buffer = vec![0u8; length];
        with_timeout(self.context.read_timeout, self.stream.read_exact(&mut buffer)).await?;
        self.bytes_received += length as u64;
        Ok(buffer)
    }

    async fn read_id(&mut self) -> io::Result<[u8; 20]>
    {
        let mut id = [0u8; 20];
        id.copy_from_slice(&self.read_bytes(20).await?);
        Ok(id)
    }

    /// Consumes `length` payload bytes without keeping them.
    async fn drain(&mut self, length: u64) -> io::Result<()>
    {
        let mut limited = (&mut self.stream).take(length);
        let copied = with_timeout(self.context.read_timeout, tokio::io::copy(&mut limited, &mut tokio::io::sink())).await?;
        self.bytes_received += copied;
        if copied < length {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        }
        Ok(())
    }

    async fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>
    {
        self.stream.write_all(bytes).await?;
        self.bytes_sent += bytes.len() as u64;
        Ok(())
    }

    /// Reads the remote handshake and answers it with ours, a full bitfield
    /// and an unchoke.
    pub async fn handshake(&mut self) -> MessageOutcome
    {
        self.try_handshake().await.unwrap_or_else(MessageOutcome::from)
    }

    async fn try_handshake(&mut self) -> io::Result<MessageOutcome>
    {
        let protocol_length = self.read_bytes(1).await?[0] as usize;
        let protocol = self.read_bytes(protocol_length).await?;
        if protocol != PROTOCOL_STRING {
            return close(UNSUPPORTED_PROTOCOL);
        }
        self.read_bytes(8).await?;
        let info_hash = InfoHash(self.read_id().await?);
        self.remote_peer_id = Some(PeerId(self.read_id().await?));

        let torrent = match self.context.persistence.get_torrent(info_hash).await {
            Ok(Some(torrent)) => torrent,
            Ok(None) => return close(UNKNOWN_INFO_HASH),
            Err(error) => return close(&format!("Unable to look up torrent: {error}"))
        };

        if self.context.seeders_stop_seeding > 0 {
            match self.context.persistence.get_peer_stats(info_hash, self.context.peer_id).await {
                Ok(stats) if stats.complete >= self.context.seeders_stop_seeding => return close(STOP_SEEDING),
                Ok(_) => {}
                Err(error) => return close(&format!("Unable to count seeders: {error}"))
            }
        }

        let piece_count = match torrent.piece_count() {
            Ok(piece_count) => piece_count,
            Err(error) => return close(&format!("Unable to read torrent: {error}"))
        };

        let handshake = handshake_message(&info_hash, &self.context.peer_id);
        self.write_bytes(&handshake).await?;
        self.write_bytes(&bitfield_message(piece_count)?).await?;
        self.write_bytes(&UNCHOKE_MESSAGE).await?;

        debug!("{} Handshake with {:?} for {} done", LOG_PREFIX, self.peer_addr, info_hash);
        self.torrent = Some(torrent);
        self.state = ConnectionState::Serving;
        Ok(MessageOutcome::Continue)
    }

    /// Reads and handles a single length-prefixed message.
    pub async fn handle_message(&mut self) -> MessageOutcome
    {
        self.try_handle_message().await.unwrap_or_else(MessageOutcome::from)
    }

    async fn try_handle_message(&mut self) -> io::Result<MessageOutcome>
    {
        let length = NetworkEndian::read_u32(&self.read_bytes(4).await?);
        if length == 0 {
            return Ok(MessageOutcome::Continue);
        }
        let id = self.read_bytes(1).await?[0];
        let payload_length = u64::from(length) - 1;

        match MessageId::try_from(id) {
            Err(id) => close(&format!("Unsupported message type {id}.")),
            Ok(MessageId::Request) => {
                if payload_length != 12 {
                    return close(&format!("Invalid request length {payload_length}."));
                }
                let payload = self.read_bytes(12).await?;
                self.serve_block(
                    NetworkEndian::read_u32(&payload[0..4]),
                    NetworkEndian::read_u32(&payload[4..8]),
                    NetworkEndian::read_u32(&payload[8..12])
                ).await
            }
            Ok(_) => {
                self.drain(payload_length).await?;
                Ok(MessageOutcome::Continue)
            }
        }
    }

    async fn serve_block(&mut self, piece_index: u32, block_begin: u32, length: u32) -> io::Result<MessageOutcome>
    {
        let Some(torrent) = self.torrent.clone() else {
            return close("Request before handshake.");
        };
        let block = tokio::task::spawn_blocking(move || {
            torrent.read_block(u64::from(piece_index), u64::from(block_begin), u64::from(length))
        }).await.map_err(io::Error::other)?;
        let block = match block {
            Ok(block) => block,
            Err(error) => return close(&format!("Invalid block request: {error}"))
        };
        self.write_bytes(&piece_message(piece_index, block_begin, &block)?).await?;
        self.data_sent += block.len() as u64;
        Ok(MessageOutcome::Continue)
    }

    /// Serves the peer until the connection ends.
    pub async fn run(mut self) -> ConnectionReport
    {
        let outcome = loop {
            let outcome = match self.state {
                ConnectionState::AwaitingHandshake => self.handshake().await,
                ConnectionState::Serving => self.handle_message().await,
                ConnectionState::Closed => MessageOutcome::from(io::Error::from(io::ErrorKind::UnexpectedEof))
            };
            if outcome != MessageOutcome::Continue {
                break outcome;
            }
        };
        self.state = ConnectionState::Closed;
        let _ = self.stream.shutdown().await;

        let regular = outcome.is_regular_close();
        let reason = match outcome {
            MessageOutcome::CloseConnection(reason) => reason,
            MessageOutcome::Continue => String::new()
        };
        let peer_id = self.remote_peer_id.map(|peer_id| peer_id.to_string()).unwrap_or_else(|| String::from("unknown"));
        let peer_addr = self.peer_addr.map(|addr| addr.to_string()).unwrap_or_else(|| String::from("unknown"));
        if regular {
            info!("{} Closed {} ({}): {} sent={} received={} data={}", LOG_PREFIX, peer_id, peer_addr, reason, self.bytes_sent, self.bytes_received, self.data_sent);
        } else {
            warn!("{} Closed {} ({}): {} sent={} received={} data={}", LOG_PREFIX, peer_id, peer_addr, reason, self.bytes_sent, self.bytes_received, self.data_sent);
        }

        let stats = &self.context.stats;
        stats.update_stats(StatsEvent::SeederConnectionsClosed, 1);
        stats.update_stats(StatsEvent::SeederBytesSent, self.bytes_sent as i64);
        stats.update_stats(StatsEvent::SeederBytesReceived, self.bytes_received as i64);
        stats.update_stats(StatsEvent::SeederDataSent, self.data_sent as i64);

        ConnectionReport {
            reason,
            remote_peer_id: self.remote_peer_id,
            bytes_sent: self.bytes_sent,
            bytes_received: self.bytes_received,
            data_sent: self.data_sent,
        }
    }
}
