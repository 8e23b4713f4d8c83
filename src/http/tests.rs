#[cfg(test)]
mod http_tests {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use actix_web::{test, App};
    use crate::bencode::bencode::decode;
    use crate::bencode::enums::bencode_value::BencodeValue;
    use crate::config::structs::http_trackers_config::HttpTrackersConfig;
    use crate::database::structs::memory_persistence::MemoryPersistence;
    use crate::http::http::http_service_routes;
    use crate::http::structs::http_service_data::HttpServiceData;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::tracker::structs::tracker_core::TrackerCore;

    fn service_data() -> Arc<HttpServiceData> {
        Arc::new(HttpServiceData {
            tracker_core: Arc::new(TrackerCore::new(Arc::new(MemoryPersistence::new()), Arc::new(StatsAtomics::new()))),
            http_trackers_config: Arc::new(HttpTrackersConfig::default()),
            announce_interval: 90,
        })
    }

    fn announce_uri(peer: char, port: u16, extra: &str) -> String {
        format!(
            "/announce?info_hash=%01%02%03%04%05%06%07%08%09%0a%0b%0c%0d%0e%0f%10%11%12%13%14&peer_id={}&port={}&uploaded=0&downloaded=0&left=0{}",
            peer.to_string().repeat(20), port, extra
        )
    }

    fn peer() -> SocketAddr {
        "10.1.2.3:40000".parse().unwrap()
    }

    #[actix_web::test]
    async fn test_announce_round_trip() {
        let app = test::init_service(App::new().configure(http_service_routes(service_data()))).await;

        let request = test::TestRequest::get().uri(&announce_uri('a', 6881, "")).peer_addr(peer()).to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let body = decode(&test::read_body(response).await).unwrap();
        assert_eq!(body.get(b"interval").and_then(BencodeValue::as_integer), Some(90));
        assert_eq!(body.get(b"complete").and_then(BencodeValue::as_integer), Some(0));

        let request = test::TestRequest::get().uri(&announce_uri('b', 6882, "&compact=1")).peer_addr(peer()).to_request();
        let body = decode(&test::call_and_read_body(&app, request).await).unwrap();
        assert_eq!(body.get(b"complete").and_then(BencodeValue::as_integer), Some(1));
        assert_eq!(body.get(b"peers").and_then(BencodeValue::as_bytes), Some(&[10u8, 1, 2, 3, 0x1a, 0xe1][..]));
    }

    #[actix_web::test]
    async fn test_real_ip_header_overrides_socket_address() {
        let app = test::init_service(App::new().configure(http_service_routes(service_data()))).await;

        let request = test::TestRequest::get()
            .uri(&announce_uri('a', 6881, ""))
            .peer_addr(peer())
            .insert_header(("X-Real-IP", "172.16.0.9"))
            .to_request();
        test::call_service(&app, request).await;

        let request = test::TestRequest::get().uri(&announce_uri('b', 6882, "")).peer_addr(peer()).to_request();
        let body = decode(&test::call_and_read_body(&app, request).await).unwrap();
        let peers = body.get(b"peers").and_then(BencodeValue::as_list).unwrap();
        assert_eq!(peers[0].get(b"ip").and_then(BencodeValue::as_str), Some("172.16.0.9"));
    }

    #[actix_web::test]
    async fn test_failures_are_bencoded() {
        let app = test::init_service(App::new().configure(http_service_routes(service_data()))).await;

        let request = test::TestRequest::get().uri("/announce?port=1").peer_addr(peer()).to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let body = decode(&test::read_body(response).await).unwrap();
        assert_eq!(
            body.get(b"failure reason").and_then(BencodeValue::as_str),
            Some("Invalid get parameters; Missing: info_hash, peer_id, uploaded, downloaded, left")
        );

        let request = test::TestRequest::get().uri("/scrape").peer_addr(peer()).to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let body = decode(&test::read_body(response).await).unwrap();
        assert_eq!(body.get(b"failure reason").and_then(BencodeValue::as_str), Some("unknown request"));
    }

    #[actix_web::test]
    async fn test_malformed_query_reaches_the_tracker() {
        let app = test::init_service(App::new().configure(http_service_routes(service_data()))).await;

        let uri = "/announce?INFO_HASH=%zz&peer_id=aaaaaaaaaaaaaaaaaaaa&port=6881&uploaded=0&downloaded=0&left=0&&=x";
        let request = test::TestRequest::get().uri(uri).peer_addr(peer()).to_request();
        let body = decode(&test::call_and_read_body(&app, request).await).unwrap();
        assert_eq!(body.get(b"failure reason").and_then(BencodeValue::as_str), Some("Invalid length of info_hash."));
    }

    #[actix_web::test]
    async fn test_unknown_origin() {
        let app = test::init_service(App::new().configure(http_service_routes(service_data()))).await;
        let request = test::TestRequest::get().uri(&announce_uri('a', 6881, "")).to_request();
        let body = decode(&test::call_and_read_body(&app, request).await).unwrap();
        assert_eq!(body.get(b"failure reason").and_then(BencodeValue::as_str), Some("unknown origin ip"));
    }
}
