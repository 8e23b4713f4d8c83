mod common;

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use sha1::{Digest, Sha1};
use torrust_seedtracker::bencode::bencode::decode;
use torrust_seedtracker::bencode::enums::bencode_value::BencodeValue;
use torrust_seedtracker::database::database::persistence_connector;
use torrust_seedtracker::tracker::structs::info_hash::InfoHash;

const INTERVAL: u64 = 60;

#[tokio::test]
async fn test_created_torrent_and_peers_survive_reopening_sqlite() {
    let directory = tempfile::tempdir().unwrap();
    let config = Arc::new(common::sqlite_config(directory.path()));
    let content = common::random_payload(5000);
    let payload = common::write_payload(&content);
    let seeder = common::random_peer_id();

    let info_hash = {
        let tracker = common::create_tracker(persistence_connector(config.clone(), false).await.unwrap());
        let torrent_file = tracker.create_torrent(
            &config.torrent.announce_urls,
            &payload.path().to_string_lossy(),
            config.torrent.piece_size,
            Some(String::from("payload.bin"))
        ).await.unwrap();

        let metainfo = decode(&torrent_file).unwrap();
        assert_eq!(metainfo.get(b"announce").and_then(BencodeValue::as_str), Some(common::ANNOUNCE_URL));
        let info = metainfo.get(b"info").unwrap();
        assert_eq!(info.get(b"length").and_then(BencodeValue::as_integer), Some(5000));
        assert_eq!(info.get(b"name").and_then(BencodeValue::as_str), Some("payload.bin"));
        assert_eq!(info.get(b"pieces").and_then(BencodeValue::as_bytes).map(|pieces| pieces.len()), Some(5 * 20));
        let info_hash = InfoHash::try_from(Sha1::digest(info.encode()).as_slice()).unwrap();

        let query = common::announce_query(&info_hash, &seeder, 51413, 0, &[]);
        let response = decode(&tracker.announce(&query, IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10)), INTERVAL).await).unwrap();
        assert_eq!(response.get(b"interval").and_then(BencodeValue::as_integer), Some(INTERVAL as i64));
        assert_eq!(response.get(b"peers").and_then(BencodeValue::as_list).map(|peers| peers.len()), Some(0));
        info_hash
    };

    let persistence = persistence_connector(config.clone(), false).await.unwrap();
    let torrent = persistence.get_torrent(info_hash).await.unwrap().unwrap();
    assert_eq!(torrent.length().unwrap(), 5000);
    assert_eq!(torrent.name(), "payload.bin");
    assert_eq!(torrent.read_block(4, 0, 904).unwrap(), content[4096..].to_vec());

    let tracker = common::create_tracker(persistence);
    let leecher = common::random_peer_id();
    let query = common::announce_query(&info_hash, &leecher, 6881, 5000, &[("compact", "1")]);
    let response = decode(&tracker.announce(&query, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)), INTERVAL).await).unwrap();
    assert_eq!(response.get(b"complete").and_then(BencodeValue::as_integer), Some(1));
    assert_eq!(response.get(b"incomplete").and_then(BencodeValue::as_integer), Some(0));
    assert_eq!(response.get(b"peers").and_then(BencodeValue::as_bytes), Some(&[192u8, 168, 1, 10, 0xc8, 0xd5][..]));
}

#[tokio::test]
async fn test_swarm_counts_follow_events() {
    let config = Arc::new(common::create_test_config(6881));
    let tracker = common::create_tracker(persistence_connector(config, false).await.unwrap());
    let info_hash = common::random_info_hash();
    let origin = IpAddr::V4(Ipv4Addr::LOCALHOST);
    let observer = common::random_peer_id();
    let peers: Vec<_> = (0..3).map(|_| common::random_peer_id()).collect();

    for (index, peer_id) in peers.iter().enumerate() {
        let query = common::announce_query(&info_hash, peer_id, 7000 + index as u16, 100, &[("event", "started")]);
        tracker.announce(&query, origin, INTERVAL).await;
    }
    let counts = |response: &BencodeValue| (
        response.get(b"complete").and_then(BencodeValue::as_integer),
        response.get(b"incomplete").and_then(BencodeValue::as_integer)
    );

    let observe = common::announce_query(&info_hash, &observer, 7100, 100, &[]);
    let response = decode(&tracker.announce(&observe, origin, INTERVAL).await).unwrap();
    assert_eq!(counts(&response), (Some(0), Some(3)));

    let completed = common::announce_query(&info_hash, &peers[0], 7000, 50, &[("event", "completed")]);
    tracker.announce(&completed, origin, INTERVAL).await;
    let stopped = common::announce_query(&info_hash, &peers[1], 7001, 100, &[("event", "stopped")]);
    tracker.announce(&stopped, origin, INTERVAL).await;

    let response = decode(&tracker.announce(&observe, origin, INTERVAL).await).unwrap();
    assert_eq!(counts(&response), (Some(1), Some(1)));
    assert_eq!(response.get(b"peers").and_then(BencodeValue::as_list).map(|peers| peers.len()), Some(2));
    assert_eq!(tracker.stats.get_stats().tcp4_announces_handled, 7);
}

#[tokio::test]
async fn test_create_torrent_of_missing_file_fails() {
    let config = Arc::new(common::create_test_config(6881));
    let tracker = common::create_tracker(persistence_connector(config.clone(), false).await.unwrap());
    let directory = tempfile::tempdir().unwrap();
    let missing = directory.path().join("missing.bin");

    let result = tracker.create_torrent(&config.torrent.announce_urls, &missing.to_string_lossy(), 1024, None).await;
    assert!(result.is_err());
    assert_eq!(tracker.stats.get_stats().torrents_created, 0);
    assert!(tracker.persistence.get_all_info_hashes().await.unwrap().is_empty());
}
