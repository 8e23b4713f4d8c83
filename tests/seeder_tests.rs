mod common;

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::watch;
use torrust_seedtracker::bencode::bencode::decode;
use torrust_seedtracker::bencode::enums::bencode_value::BencodeValue;
use torrust_seedtracker::database::database::persistence_connector;
use torrust_seedtracker::seeder::seeder::{generate_peer_id, handshake_message, UNCHOKE_MESSAGE};
use torrust_seedtracker::seeder::structs::seed_server::SeedServer;
use torrust_seedtracker::stats::structs::stats_atomics::StatsAtomics;
use torrust_seedtracker::supervisor::structs::supervisor::Supervisor;
use torrust_seedtracker::tracker::structs::tracker_core::TrackerCore;

#[tokio::test]
async fn test_seeder_announces_and_serves_created_torrent() {
    let port = common::free_port();
    let config = Arc::new(common::create_test_config(port));
    let stats = Arc::new(StatsAtomics::new());
    let persistence = persistence_connector(config.clone(), false).await.unwrap();
    let tracker = TrackerCore::new(persistence.clone(), stats.clone());

    let content = common::random_payload(3000);
    let payload = common::write_payload(&content);
    tracker.create_torrent(&config.torrent.announce_urls, &payload.path().to_string_lossy(), config.torrent.piece_size, None).await.unwrap();
    let info_hash = persistence.get_all_info_hashes().await.unwrap()[0].info_hash;

    let (shutdown_sender, shutdown) = watch::channel(false);
    let server = SeedServer::new(&config.seeder, persistence.clone(), stats.clone(), shutdown.clone()).unwrap();
    let supervisor = Supervisor::new(Arc::new(server), shutdown).with_stats(stats.clone());
    let running = tokio::spawn(supervisor.run());

    let leecher = common::random_peer_id();
    let query = common::announce_query(&info_hash, &leecher, 6881, 3000, &[("compact", "1")]);
    let mut expected = vec![127u8, 0, 0, 1];
    expected.extend_from_slice(&port.to_be_bytes());
    let mut announced = false;
    for _ in 0..50 {
        let response = decode(&tracker.announce(&query, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 9)), 60).await).unwrap();
        if response.get(b"peers").and_then(BencodeValue::as_bytes) == Some(expected.as_slice()) {
            assert_eq!(response.get(b"complete").and_then(BencodeValue::as_integer), Some(1));
            announced = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(announced, "seeder never showed up in the swarm");

    let seeder_peer_id = generate_peer_id(&config.seeder.external_address, port);
    let mut client = TcpStream::connect(("127.0.0.1", port)).await.unwrap();
    client.write_all(&handshake_message(&info_hash, &leecher)).await.unwrap();

    let mut handshake = [0u8; 68];
    client.read_exact(&mut handshake).await.unwrap();
    assert_eq!(handshake.to_vec(), handshake_message(&info_hash, &seeder_peer_id));
    let mut bitfield = [0u8; 6];
    client.read_exact(&mut bitfield).await.unwrap();
    assert_eq!(bitfield, [0, 0, 0, 2, 5, 0xE0]);
    let mut unchoke = [0u8; 5];
    client.read_exact(&mut unchoke).await.unwrap();
    assert_eq!(unchoke, UNCHOKE_MESSAGE);

    let mut request = vec![0, 0, 0, 13, 6];
    request.extend_from_slice(&2u32.to_be_bytes());
    request.extend_from_slice(&100u32.to_be_bytes());
    request.extend_from_slice(&500u32.to_be_bytes());
    client.write_all(&request).await.unwrap();

    assert_eq!(client.read_u32().await.unwrap(), 9 + 500);
    assert_eq!(client.read_u8().await.unwrap(), 7);
    assert_eq!(client.read_u32().await.unwrap(), 2);
    assert_eq!(client.read_u32().await.unwrap(), 100);
    let mut block = vec![0u8; 500];
    client.read_exact(&mut block).await.unwrap();
    assert_eq!(block, content[2148..2648].to_vec());
    drop(client);

    shutdown_sender.send(true).unwrap();
    tokio::time::timeout(Duration::from_secs(5), running).await.unwrap().unwrap();
    let snapshot = stats.get_stats();
    assert!(snapshot.seeder_announces >= 1);
    assert_eq!(snapshot.torrents_created, 1);
    assert!(snapshot.seeder_connections_handled >= 1);
}

#[tokio::test]
async fn test_seed_server_rejects_invalid_external_address() {
    let mut config = common::create_test_config(common::free_port());
    config.seeder.external_address = String::from("not-an-ip");
    let persistence = persistence_connector(Arc::new(config.clone()), false).await.unwrap();
    let (_shutdown_sender, shutdown) = watch::channel(false);

    let result = SeedServer::new(&config.seeder, persistence, Arc::new(StatsAtomics::new()), shutdown);
    assert!(result.is_err());
}
