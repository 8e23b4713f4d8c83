use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use tokio::runtime::Builder;
use tokio::sync::watch;
use torrust_seedtracker::common::common::setup_logging;
use torrust_seedtracker::config::structs::configuration::Configuration;
use torrust_seedtracker::database::database::persistence_connector;
use torrust_seedtracker::http::http::http_service;
use torrust_seedtracker::http::structs::http_service_data::HttpServiceData;
use torrust_seedtracker::seeder::structs::seed_server::SeedServer;
use torrust_seedtracker::stats::structs::stats_atomics::StatsAtomics;
use torrust_seedtracker::structs::Cli;
use torrust_seedtracker::supervisor::structs::supervisor::Supervisor;
use torrust_seedtracker::tracker::structs::tracker_core::TrackerCore;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let stats = Arc::new(StatsAtomics::new());
            let persistence = match persistence_connector(config.clone(), args.create_database).await {
                Ok(persistence) => persistence,
                Err(error) => {
                    error!("[BOOT] Unable to open the {:?} database: {}", config.database.engine, error);
                    exit(1);
                }
            };
            if args.create_database {
                info!("[BOOT] Database ready, exiting...");
                return Ok(());
            }

            let tracker_core = Arc::new(TrackerCore::new(persistence.clone(), stats.clone()));

            if let Some(file) = &args.create_torrent {
                let torrent_file = match tracker_core.create_torrent(
                    &config.torrent.announce_urls,
                    &file.to_string_lossy(),
                    config.torrent.piece_size,
                    args.name.clone()
                ).await {
                    Ok(torrent_file) => torrent_file,
                    Err(error) => {
                        error!("[TORRENT] Unable to create a torrent for {}: {}", file.display(), error);
                        exit(1);
                    }
                };
                let output = args.torrent_output.clone().unwrap_or_else(|| {
                    let name = args.name.clone()
                        .or_else(|| file.file_name().map(|name| name.to_string_lossy().to_string()))
                        .unwrap_or_else(|| String::from("torrent"));
                    PathBuf::from(format!("{name}.torrent"))
                });
                std::fs::write(&output, torrent_file)?;
                info!("[TORRENT] Written {}", output.display());
                return Ok(());
            }

            let (shutdown_sender, shutdown) = watch::channel(false);

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if http_server_object.enabled {
                    let address: SocketAddr = match http_server_object.bind_address.parse() {
                        Ok(address) => address,
                        Err(_) => {
                            error!("[HTTP] Invalid bind address {}", http_server_object.bind_address);
                            exit(1);
                        }
                    };
                    let data = Arc::new(HttpServiceData {
                        tracker_core: tracker_core.clone(),
                        http_trackers_config: Arc::new(http_server_object.clone()),
                        announce_interval: config.tracker_config.announce_interval,
                    });
                    match http_service(address, data).await {
                        Ok((handle, future)) => {
                            http_handles.push(handle);
                            http_futures.push(future);
                        }
                        Err(error) => {
                            error!("[HTTP] Unable to bind {}: {}", address, error);
                            exit(1);
                        }
                    }
                }
            }
            if !http_futures.is_empty() {
                tokio::spawn(async move {
                    let _ = try_join_all(http_futures).await;
                });
            }

            let seeder = if config.seeder.enabled {
                let seed_server = match SeedServer::new(&config.seeder, persistence.clone(), stats.clone(), shutdown.clone()) {
                    Ok(seed_server) => seed_server,
                    Err(error) => {
                        error!("{}", error);
                        exit(1);
                    }
                };
                let supervisor = Supervisor::new(Arc::new(seed_server), shutdown.clone()).with_stats(stats.clone());
                Some(tokio::spawn(supervisor.run()))
            } else {
                None
            };

            let stats_spawn = stats.clone();
            let mut stats_shutdown = shutdown.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval.max(1)));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = stats_spawn.get_stats();
                            info!(
                                "[STATS HTTP] IPv4: A:{} | IPv6: A:{} | F:{} 404:{} | Torrents created: {}",
                                stats.tcp4_announces_handled, stats.tcp6_announces_handled,
                                stats.http_failure, stats.http_not_found, stats.torrents_created
                            );
                            info!(
                                "[STATS SEEDER] Conn: {} Closed: {} | Sent: {} Recv: {} Data: {} | Announces: {} | Restarts: {}",
                                stats.seeder_connections_handled, stats.seeder_connections_closed,
                                stats.seeder_bytes_sent, stats.seeder_bytes_received, stats.seeder_data_sent,
                                stats.seeder_announces, stats.worker_restarts
                            );
                        }
                        _ = stats_shutdown.changed() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    let _ = shutdown_sender.send(true);

                    for handle in http_handles {
                        handle.stop(true).await;
                    }
                    if let Some(seeder) = seeder {
                        let _ = seeder.await;
                    }

                    info!("Server shutting down completed");
                    Ok(())
                }
            }
        })
}
