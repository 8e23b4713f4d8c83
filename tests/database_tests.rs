mod common;

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use torrust_seedtracker::database::database::persistence_connector;
use torrust_seedtracker::database::enums::peer_status::PeerStatus;
use torrust_seedtracker::database::structs::announce_record::AnnounceRecord;
use torrust_seedtracker::database::structs::peer_stats::PeerStats;
use torrust_seedtracker::database::traits::persistence::Persistence;
use torrust_seedtracker::tracker::structs::info_hash::InfoHash;
use torrust_seedtracker::tracker::structs::peer_id::PeerId;

fn record(info_hash: InfoHash, peer_id: PeerId, ip: IpAddr, left: u64, status: Option<PeerStatus>) -> AnnounceRecord {
    AnnounceRecord {
        info_hash,
        peer_id,
        ip,
        port: 6881,
        uploaded: 10,
        downloaded: 20,
        left,
        status,
        ttl: None,
    }
}

async fn exercise(persistence: Arc<dyn Persistence>) {
    let info_hash = common::random_info_hash();
    let other_hash = common::random_info_hash();
    let seeder = common::random_peer_id();
    let leecher = common::random_peer_id();

    persistence.save_announce(record(info_hash, seeder, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 0, Some(PeerStatus::Complete))).await.unwrap();
    persistence.save_announce(record(info_hash, leecher, IpAddr::V6(Ipv6Addr::LOCALHOST), 5, None)).await.unwrap();
    persistence.save_announce(record(other_hash, leecher, IpAddr::V4(Ipv4Addr::LOCALHOST), 5, None)).await.unwrap();

    let observer = common::random_peer_id();
    assert_eq!(persistence.get_peer_stats(info_hash, observer).await.unwrap(), PeerStats { complete: 1, incomplete: 1 });
    assert_eq!(persistence.get_peer_stats(info_hash, seeder).await.unwrap(), PeerStats { complete: 0, incomplete: 1 });

    let peers = persistence.get_peers(info_hash, seeder).await.unwrap();
    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0].peer_id, leecher);
    assert_eq!(peers[0].ip, IpAddr::V6(Ipv6Addr::LOCALHOST));

    // Re-announcing moves the peer instead of adding a second row.
    persistence.save_announce(record(info_hash, leecher, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)), 0, Some(PeerStatus::Complete))).await.unwrap();
    let peers = persistence.get_peers(info_hash, observer).await.unwrap();
    assert_eq!(peers.len(), 2);
    assert!(peers.iter().any(|peer| peer.ip == IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2))));
    assert_eq!(persistence.get_peer_stats(info_hash, observer).await.unwrap(), PeerStats { complete: 2, incomplete: 0 });
    assert!(persistence.get_torrent(info_hash).await.unwrap().is_none());
}

#[tokio::test]
async fn test_memory_backend() {
    let config = Arc::new(common::create_test_config(6881));
    exercise(persistence_connector(config, true).await.unwrap()).await;
}

#[tokio::test]
async fn test_sqlite_backend() {
    let directory = tempfile::tempdir().unwrap();
    let config = Arc::new(common::sqlite_config(directory.path()));
    exercise(persistence_connector(config.clone(), true).await.unwrap()).await;
    assert!(directory.path().join("seedtracker.db").exists());
}
