use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{ConnectOptions, Row};
use crate::common::common::current_time;
use crate::database::enums::database_error::DatabaseError;
use crate::database::structs::announce_record::AnnounceRecord;
use crate::database::structs::peer_entry::PeerEntry;
use crate::database::structs::peer_stats::PeerStats;
use crate::database::structs::sqlite_persistence::SqlitePersistence;
use crate::database::structs::torrent_summary::TorrentSummary;
use crate::database::traits::persistence::Persistence;
use crate::file::structs::local_file::LocalFile;
use crate::torrent::structs::torrent::Torrent;
use crate::torrent::structs::torrent_attributes::TorrentAttributes;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

const LOG_PREFIX: &str = "[SQLite]";

const PRAGMAS: [&str; 2] = [
    "PRAGMA temp_store = memory;",
    "PRAGMA synchronous = full;",
];

const CREATE_TORRENTS: &str = "CREATE TABLE IF NOT EXISTS `torrents` (\
    `info_hash` BLOB PRIMARY KEY NOT NULL, \
    `length` INTEGER NOT NULL, \
    `pieces_length` INTEGER NOT NULL, \
    `pieces` BLOB NOT NULL, \
    `name` TEXT NOT NULL, \
    `path` TEXT NOT NULL, \
    `status` TEXT NOT NULL DEFAULT 'active')";

const CREATE_PEERS: &str = "CREATE TABLE IF NOT EXISTS `peers` (\
    `info_hash` BLOB NOT NULL, \
    `peer_id` BLOB NOT NULL, \
    `ip_address` TEXT NOT NULL, \
    `port` INTEGER NOT NULL, \
    `bytes_downloaded` INTEGER NOT NULL DEFAULT 0, \
    `bytes_uploaded` INTEGER NOT NULL DEFAULT 0, \
    `bytes_left` INTEGER NOT NULL DEFAULT 0, \
    `status` TEXT NOT NULL DEFAULT 'incomplete', \
    `expires` INTEGER, \
    PRIMARY KEY (`info_hash`, `peer_id`))";

fn to_sql_integer(value: u64) -> i64
{
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn from_sql_integer(value: i64, column: &'static str) -> Result<u64, DatabaseError>
{
    u64::try_from(value).map_err(|_| DatabaseError::Corrupt(column))
}

fn read_hash(row: &SqliteRow, column: &'static str) -> Result<[u8; 20], DatabaseError>
{
    let bytes: Vec<u8> = row.try_get(column)?;
    <[u8; 20]>::try_from(bytes.as_slice()).map_err(|_| DatabaseError::Corrupt(column))
}

impl SqlitePersistence {
    #[tracing::instrument(level = "debug")]
    pub async fn connect(dsl: &str) -> Result<SqlitePersistence, DatabaseError>
    {
        let options = SqliteConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        let mut pool_options = SqlitePoolOptions::new();
        if dsl.contains(":memory:") {
            // Every connection to an in-memory database opens a new, empty one.
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }
        let pool = pool_options.connect_with(options.create_if_missing(true)).await?;
        Ok(SqlitePersistence { pool })
    }

    #[tracing::instrument(level = "debug")]
    pub async fn create_tables(&self) -> Result<(), DatabaseError>
    {
        info!("{} Setting the PRAGMA config...", LOG_PREFIX);
        for pragma in PRAGMAS {
            sqlx::query(pragma).execute(&self.pool).await?;
        }
        info!("{} Creating table torrents", LOG_PREFIX);
        sqlx::query(CREATE_TORRENTS).execute(&self.pool).await?;
        info!("{} Creating table peers", LOG_PREFIX);
        sqlx::query(CREATE_PEERS).execute(&self.pool).await?;
        Ok(())
    }

    fn torrent_from_row(row: &SqliteRow) -> Result<Torrent, DatabaseError>
    {
        let path: String = row.try_get("path")?;
        let file = LocalFile::open(&path)?;
        let attributes = TorrentAttributes {
            size_piece: from_sql_integer(row.try_get("pieces_length")?, "pieces_length")?,
            name: Some(row.try_get("name")?),
            length: Some(from_sql_integer(row.try_get("length")?, "length")?),
            pieces: Some(row.try_get("pieces")?),
            info_hash: Some(InfoHash(read_hash(row, "info_hash")?)),
        };
        Ok(Torrent::from_attributes(Arc::new(file), attributes)?)
    }
}

#[async_trait]
impl Persistence for SqlitePersistence {
    async fn save_torrent(&self, torrent: Arc<Torrent>) -> Result<(), DatabaseError>
    {
        let info_hash = torrent.info_hash()?;
        debug!("{} Storing torrent {}", LOG_PREFIX, info_hash);
        sqlx::query(
            "INSERT INTO `torrents` (`info_hash`, `length`, `pieces_length`, `pieces`, `name`, `path`) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT (`info_hash`) DO UPDATE SET \
             `length` = excluded.`length`, \
             `pieces_length` = excluded.`pieces_length`, \
             `pieces` = excluded.`pieces`, \
             `name` = excluded.`name`, \
             `path` = excluded.`path`"
        )
            .bind(info_hash.0.to_vec())
            .bind(to_sql_integer(torrent.length()?))
            .bind(to_sql_integer(torrent.size_piece()))
            .bind(torrent.pieces()?.to_vec())
            .bind(torrent.name())
            .bind(torrent.file_path())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_torrent(&self, info_hash: InfoHash) -> Result<Option<Arc<Torrent>>, DatabaseError>
    {
        let row = sqlx::query(
            "SELECT `info_hash`, `length`, `pieces_length`, `pieces`, `name`, `path` FROM `torrents` \
             WHERE `info_hash` = ? AND `status` = 'active'"
        )
            .bind(info_hash.0.to_vec())
            .fetch_optional(&self.pool)
            .await?;
        match row {
            None => Ok(None),
            Some(row) => Ok(Some(Arc::new(SqlitePersistence::torrent_from_row(&row)?)))
        }
    }

    async fn get_all_info_hashes(&self) -> Result<Vec<TorrentSummary>, DatabaseError>
    {
        let rows = sqlx::query("SELECT `info_hash`, `length` FROM `torrents` WHERE `status` = 'active'")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(|row| -> Result<TorrentSummary, DatabaseError> {
            Ok(TorrentSummary {
                info_hash: InfoHash(read_hash(row, "info_hash")?),
                length: from_sql_integer(row.try_get("length")?, "length")?,
            })
        }).collect()
    }

    async fn save_announce(&self, announce: AnnounceRecord) -> Result<(), DatabaseError>
    {
        let expires = to_sql_integer(announce.expires_at(current_time()));
        let status = announce.status.map(|status| status.as_str());
        sqlx::query(
            "INSERT INTO `peers` (`info_hash`, `peer_id`, `ip_address`, `port`, `bytes_downloaded`, `bytes_uploaded`, `bytes_left`, `status`, `expires`) \
             VALUES (?, ?, ?, ?, ?, ?, ?, COALESCE(?, 'incomplete'), ?) \
             ON CONFLICT (`info_hash`, `peer_id`) DO UPDATE SET \
             `ip_address` = excluded.`ip_address`, \
             `port` = excluded.`port`, \
             `bytes_downloaded` = excluded.`bytes_downloaded`, \
             `bytes_uploaded` = excluded.`bytes_uploaded`, \
             `bytes_left` = excluded.`bytes_left`, \
             `status` = COALESCE(?, `peers`.`status`), \
             `expires` = excluded.`expires`"
        )
            .bind(announce.info_hash.0.to_vec())
            .bind(announce.peer_id.0.to_vec())
            .bind(announce.ip.to_string())
            .bind(i64::from(announce.port))
            .bind(to_sql_integer(announce.downloaded))
            .bind(to_sql_integer(announce.uploaded))
            .bind(to_sql_integer(announce.left))
            .bind(status)
            .bind(expires)
            .bind(status)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_peers(&self, info_hash: InfoHash, excluded_peer_id: PeerId) -> Result<Vec<PeerEntry>, DatabaseError>
    {
        let rows = sqlx::query(
            "SELECT `peer_id`, `ip_address`, `port` FROM `peers` \
             WHERE `info_hash` = ? AND `peer_id` != ? AND (`expires` IS NULL OR `expires` > ?)"
        )
            .bind(info_hash.0.to_vec())
            .bind(excluded_peer_id.0.to_vec())
            .bind(to_sql_integer(current_time()))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(|row| -> Result<PeerEntry, DatabaseError> {
            let ip: String = row.try_get("ip_address")?;
            let port: i64 = row.try_get("port")?;
            Ok(PeerEntry {
                peer_id: PeerId(read_hash(row, "peer_id")?),
                ip: IpAddr::from_str(&ip).map_err(|_| DatabaseError::Corrupt("ip_address"))?,
                port: u16::try_from(port).map_err(|_| DatabaseError::Corrupt("port"))?,
            })
        }).collect()
    }

    async fn get_peer_stats(&self, info_hash: InfoHash, excluded_peer_id: PeerId) -> Result<PeerStats, DatabaseError>
    {
        let row = sqlx::query(
            "SELECT COALESCE(SUM(`status` = 'complete'), 0) AS `complete`, \
             COALESCE(SUM(`status` != 'complete'), 0) AS `incomplete` FROM `peers` \
             WHERE `info_hash` = ? AND `peer_id` != ? AND (`expires` IS NULL OR `expires` > ?)"
        )
            .bind(info_hash.0.to_vec())
            .bind(excluded_peer_id.0.to_vec())
            .bind(to_sql_integer(current_time()))
            .fetch_one(&self.pool)
            .await?;
        Ok(PeerStats {
            complete: from_sql_integer(row.try_get("complete")?, "complete")?,
            incomplete: from_sql_integer(row.try_get("incomplete")?, "incomplete")?,
        })
    }

    async fn reset_after_spawn(&self) -> Result<(), DatabaseError>
    {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
