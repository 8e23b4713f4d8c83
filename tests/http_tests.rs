mod common;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use torrust_seedtracker::bencode::bencode::decode;
use torrust_seedtracker::bencode::enums::bencode_value::BencodeValue;
use torrust_seedtracker::config::structs::http_trackers_config::HttpTrackersConfig;
use torrust_seedtracker::database::structs::memory_persistence::MemoryPersistence;
use torrust_seedtracker::http::http::http_service;
use torrust_seedtracker::http::structs::http_service_data::HttpServiceData;

async fn get(address: SocketAddr, path: &str) -> (String, Vec<u8>) {
    let mut stream = TcpStream::connect(address).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {address}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();

    let split = response.windows(4).position(|window| window == b"\r\n\r\n").unwrap();
    let head = String::from_utf8_lossy(&response[..split]).to_string();
    (head, response[split + 4..].to_vec())
}

#[actix_web::test]
async fn test_http_server_answers_announces() {
    let address: SocketAddr = format!("127.0.0.1:{}", common::free_port()).parse().unwrap();
    let tracker_core = Arc::new(common::create_tracker(Arc::new(MemoryPersistence::new())));
    let data = Arc::new(HttpServiceData {
        tracker_core: tracker_core.clone(),
        http_trackers_config: Arc::new(HttpTrackersConfig {
            bind_address: address.to_string(),
            threads: 1,
            ..HttpTrackersConfig::default()
        }),
        announce_interval: 120,
    });
    let (handle, server) = http_service(address, data).await.unwrap();
    actix_web::rt::spawn(server);

    let info_hash = common::random_info_hash();
    let seeder = common::random_peer_id();
    let encode = |bytes: &[u8]| percent_encode(bytes, NON_ALPHANUMERIC).to_string();
    let path = format!(
        "/announce?info_hash={}&peer_id={}&port=51413&uploaded=0&downloaded=0&left=0&event=started",
        encode(&info_hash.0), encode(&seeder.0)
    );
    let (head, body) = get(address, &path).await;
    assert!(head.starts_with("HTTP/1.1 200"));
    let response = decode(&body).unwrap();
    assert_eq!(response.get(b"interval").and_then(BencodeValue::as_integer), Some(120));

    let leecher = common::random_peer_id();
    let path = format!(
        "/announce?info_hash={}&peer_id={}&port=6881&uploaded=0&downloaded=0&left=10&compact=1",
        encode(&info_hash.0), encode(&leecher.0)
    );
    let (_, body) = get(address, &path).await;
    let response = decode(&body).unwrap();
    assert_eq!(response.get(b"complete").and_then(BencodeValue::as_integer), Some(1));
    assert_eq!(response.get(b"peers").and_then(BencodeValue::as_bytes), Some(&[127u8, 0, 0, 1, 0xc8, 0xd5][..]));

    let (head, body) = get(address, "/announce?port=1").await;
    assert!(head.starts_with("HTTP/1.1 200"));
    let failure = decode(&body).unwrap();
    assert_eq!(
        failure.get(b"failure reason").and_then(BencodeValue::as_str),
        Some("Invalid get parameters; Missing: info_hash, peer_id, uploaded, downloaded, left")
    );

    let (_, body) = get(address, "/stats").await;
    let unknown = decode(&body).unwrap();
    assert_eq!(unknown.get(b"failure reason").and_then(BencodeValue::as_str), Some("unknown request"));

    let stats = tracker_core.stats.get_stats();
    assert_eq!(stats.tcp4_announces_handled, 2);
    assert_eq!(stats.http_failure, 1);
    assert_eq!(stats.http_not_found, 1);
    handle.stop(true).await;
}
