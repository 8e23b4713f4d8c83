#![allow(dead_code)]
use rand::RngExt;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;
use torrust_seedtracker::config::structs::configuration::Configuration;
use torrust_seedtracker::database::enums::database_drivers::DatabaseDrivers;
use torrust_seedtracker::database::traits::persistence::Persistence;
use torrust_seedtracker::stats::structs::stats_atomics::StatsAtomics;
use torrust_seedtracker::tracker::structs::info_hash::InfoHash;
use torrust_seedtracker::tracker::structs::peer_id::PeerId;
use torrust_seedtracker::tracker::structs::tracker_core::TrackerCore;

pub type Query = HashMap<String, Vec<Vec<u8>>>;

pub const ANNOUNCE_URL: &str = "http://127.0.0.1:6969/announce";

pub fn random_info_hash() -> InfoHash {
    InfoHash(rand::rng().random::<[u8; 20]>())
}

pub fn random_peer_id() -> PeerId {
    PeerId(rand::rng().random::<[u8; 20]>())
}

pub fn random_payload(length: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..length).map(|_| rng.random::<u8>()).collect()
}

pub fn write_payload(content: &[u8]) -> NamedTempFile {
    let mut payload = NamedTempFile::new().unwrap();
    payload.write_all(content).unwrap();
    payload.flush().unwrap();
    payload
}

/// Memory backed configuration with the seeder on `127.0.0.1:port`.
pub fn create_test_config(port: u16) -> Configuration {
    let mut config = Configuration::init();
    config.database.engine = DatabaseDrivers::memory;
    config.database.path = String::new();
    config.torrent.piece_size = 1024;
    config.torrent.announce_urls = vec![ANNOUNCE_URL.to_string()];
    config.seeder.enabled = true;
    config.seeder.internal_address = String::from("127.0.0.1");
    config.seeder.port = port;
    config.seeder.peer_workers = 2;
    config.seeder.connections_per_worker = 2;
    config.seeder.announce_interval = 1;
    config
}

pub fn sqlite_config(directory: &Path) -> Configuration {
    let mut config = create_test_config(6881);
    config.database.engine = DatabaseDrivers::sqlite3;
    config.database.path = format!("sqlite://{}", directory.join("seedtracker.db").display());
    config
}

pub fn create_tracker(persistence: Arc<dyn Persistence>) -> TrackerCore {
    TrackerCore::new(persistence, Arc::new(StatsAtomics::new()))
}

/// Free TCP port on the loopback interface.
pub fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

pub fn announce_query(info_hash: &InfoHash, peer_id: &PeerId, port: u16, left: u64, extra: &[(&str, &str)]) -> Query {
    let mut query: Query = HashMap::new();
    query.insert(String::from("info_hash"), vec![info_hash.0.to_vec()]);
    query.insert(String::from("peer_id"), vec![peer_id.0.to_vec()]);
    query.insert(String::from("port"), vec![port.to_string().into_bytes()]);
    query.insert(String::from("uploaded"), vec![b"0".to_vec()]);
    query.insert(String::from("downloaded"), vec![b"0".to_vec()]);
    query.insert(String::from("left"), vec![left.to_string().into_bytes()]);
    for (key, value) in extra {
        query.insert(key.to_string(), vec![value.as_bytes().to_vec()]);
    }
    query
}
