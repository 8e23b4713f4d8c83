#[cfg(test)]
mod database_tests {
    use std::io::Write;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;
    use crate::database::enums::peer_status::PeerStatus;
    use crate::database::structs::announce_record::AnnounceRecord;
    use crate::database::structs::memory_persistence::MemoryPersistence;
    use crate::database::structs::peer_stats::PeerStats;
    use crate::database::structs::sqlite_persistence::SqlitePersistence;
    use crate::database::traits::persistence::Persistence;
    use crate::file::structs::local_file::LocalFile;
    use crate::torrent::structs::torrent::Torrent;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;

    const SWARM: InfoHash = InfoHash([1u8; 20]);

    async fn backends() -> Vec<Arc<dyn Persistence>> {
        let sqlite = SqlitePersistence::connect("sqlite::memory:").await.unwrap();
        sqlite.create_tables().await.unwrap();
        vec![Arc::new(MemoryPersistence::new()), Arc::new(sqlite)]
    }

    fn announce(peer: u8, status: Option<PeerStatus>, ttl: Option<u64>) -> AnnounceRecord {
        AnnounceRecord {
            info_hash: SWARM,
            peer_id: PeerId([peer; 20]),
            ip: IpAddr::V4(Ipv4Addr::new(10, 0, 0, peer)),
            port: 6881 + u16::from(peer),
            uploaded: 0,
            downloaded: 0,
            left: 100,
            status,
            ttl,
        }
    }

    #[tokio::test]
    async fn test_torrent_round_trip() {
        let mut payload = tempfile::NamedTempFile::new().unwrap();
        payload.write_all(&[42u8; 1000]).unwrap();
        payload.flush().unwrap();

        for persistence in backends().await {
            let file = Arc::new(LocalFile::open(payload.path()).unwrap());
            let torrent = Arc::new(Torrent::new(file, 256, Some(String::from("payload.bin"))).unwrap());
            let info_hash = torrent.info_hash().unwrap();

            assert!(persistence.get_torrent(info_hash).await.unwrap().is_none());
            persistence.save_torrent(torrent.clone()).await.unwrap();
            persistence.save_torrent(torrent.clone()).await.unwrap();

            let stored = persistence.get_torrent(info_hash).await.unwrap().unwrap();
            assert_eq!(stored.info_hash().unwrap(), info_hash);
            assert_eq!(stored.length().unwrap(), 1000);
            assert_eq!(stored.size_piece(), 256);
            assert_eq!(stored.name(), "payload.bin");
            assert_eq!(stored.pieces().unwrap(), torrent.pieces().unwrap());
            assert_eq!(stored.read_block(3, 0, 16).unwrap(), vec![42u8; 16]);

            let summaries = persistence.get_all_info_hashes().await.unwrap();
            assert_eq!(summaries.len(), 1);
            assert_eq!(summaries[0].info_hash, info_hash);
            assert_eq!(summaries[0].length, 1000);
        }
    }

    #[tokio::test]
    async fn test_peers_exclude_requester_and_expired() {
        for persistence in backends().await {
            persistence.save_announce(announce(1, None, None)).await.unwrap();
            persistence.save_announce(announce(2, Some(PeerStatus::Complete), Some(3600))).await.unwrap();
            persistence.save_announce(announce(3, None, Some(0))).await.unwrap();

            let peers = persistence.get_peers(SWARM, PeerId([1u8; 20])).await.unwrap();
            assert_eq!(peers.len(), 1);
            assert_eq!(peers[0].peer_id, PeerId([2u8; 20]));
            assert_eq!(peers[0].ip, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)));
            assert_eq!(peers[0].port, 6883);

            let stats = persistence.get_peer_stats(SWARM, PeerId([9u8; 20])).await.unwrap();
            assert_eq!(stats, PeerStats { complete: 1, incomplete: 1 });

            let other_swarm = persistence.get_peers(InfoHash([2u8; 20]), PeerId([1u8; 20])).await.unwrap();
            assert!(other_swarm.is_empty());
        }
    }

    #[tokio::test]
    async fn test_announce_keeps_status_when_absent() {
        for persistence in backends().await {
            persistence.save_announce(announce(1, Some(PeerStatus::Complete), None)).await.unwrap();
            persistence.save_announce(announce(1, None, None)).await.unwrap();
            let stats = persistence.get_peer_stats(SWARM, PeerId([9u8; 20])).await.unwrap();
            assert_eq!(stats, PeerStats { complete: 1, incomplete: 0 });

            persistence.save_announce(announce(1, Some(PeerStatus::Incomplete), Some(0))).await.unwrap();
            let stats = persistence.get_peer_stats(SWARM, PeerId([9u8; 20])).await.unwrap();
            assert_eq!(stats, PeerStats::default());
            assert!(persistence.get_peers(SWARM, PeerId([9u8; 20])).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_reset_after_spawn() {
        for persistence in backends().await {
            persistence.reset_after_spawn().await.unwrap();
        }
    }

    #[test]
    fn test_peer_status_strings() {
        assert_eq!(PeerStatus::Complete.to_string(), "complete");
        assert_eq!("incomplete".parse::<PeerStatus>().unwrap(), PeerStatus::Incomplete);
        assert!("seeding".parse::<PeerStatus>().is_err());
        assert_eq!(announce(1, None, None).expires_at(100), 100 + 31536000);
        assert_eq!(announce(1, None, Some(0)).expires_at(100), 100);
    }
}
