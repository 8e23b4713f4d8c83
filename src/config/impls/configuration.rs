use std::fs::File;
use std::io::Write;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::seeder_config::SeederConfig;
use crate::config::structs::torrent_config::TorrentConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

const ANNOUNCE_URL_REGEX: &str = r"^(https?|udp)://[^\s/?#]+(:[0-9]{1,5})?(/[^\s]*)?$";
const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                announce_interval: 60,
            },
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://data.db"),
            },
            http_server: vec![HttpTrackersConfig::default()],
            seeder: SeederConfig::default(),
            torrent: TorrentConfig {
                piece_size: 262144,
                announce_urls: vec![String::from("http://127.0.0.1:6969/announce")],
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file<P: AsRef<Path>>(path: P, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config<P: AsRef<Path>>(config: &Configuration, path: P) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        Self::load_from_path("config.toml", create)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P, create: bool) -> Result<Configuration, CustomError> {
        let path = path.as_ref();
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config.toml file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit the config.TOML in the root folder, exiting now...");
                        Err(CustomError::new("create config.toml file"))
                    }
                    Err(e) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config.toml file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(CustomError::new(&format!("[VALIDATE CONFIG] Unknown log level \"{}\"", self.log_level)));
        }
        if self.tracker_config.announce_interval == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] tracker_config.announce_interval must be positive"));
        }
        for http_server in &self.http_server {
            if http_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] Invalid HTTP bind address \"{}\"", http_server.bind_address)));
            }
        }

        let seeder = &self.seeder;
        for (name, address) in [("external_address", &seeder.external_address), ("internal_address", &seeder.internal_address)] {
            if address.parse::<IpAddr>().is_err() {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] Invalid seeder {name} \"{address}\"")));
            }
        }
        if seeder.port == 0 || seeder.peer_workers == 0 || seeder.connections_per_worker == 0 || seeder.announces_per_worker == 0 || seeder.announce_interval == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] Seeder port, workers, iterations and interval must be positive"));
        }

        if self.torrent.piece_size == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] torrent.piece_size must be positive"));
        }
        for url in &self.torrent.announce_urls {
            Self::validate_value("[TORRENT] Announce URL", url, ANNOUNCE_URL_REGEX)?;
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), CustomError>
    {
        let regex_check = Regex::new(regex).map_err(|e| CustomError::new(&e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(CustomError::new(&format!("[VALIDATE CONFIG] Error checking {name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }
}
