use std::sync::Arc;
use log::info;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_error::DatabaseError;
use crate::database::structs::memory_persistence::MemoryPersistence;
use crate::database::structs::sqlite_persistence::SqlitePersistence;
use crate::database::traits::persistence::Persistence;

/// Opens the backend selected by `database.engine`.
///
/// SQLite tables are created when missing. With `create_database` set the
/// creation is logged as a boot step, so the caller can exit right after.
#[tracing::instrument(level = "debug")]
pub async fn persistence_connector(config: Arc<Configuration>, create_database: bool) -> Result<Arc<dyn Persistence>, DatabaseError>
{
    match config.database.engine {
        DatabaseDrivers::memory => {
            if create_database {
                info!("[BOOT] The memory engine has no database to create.");
            }
            Ok(Arc::new(MemoryPersistence::new()))
        }
        DatabaseDrivers::sqlite3 => {
            let persistence = SqlitePersistence::connect(config.database.path.as_str()).await?;
            if create_database {
                info!("[BOOT] Database creation triggered for SQLite.");
            }
            persistence.create_tables().await?;
            Ok(Arc::new(persistence))
        }
    }
}
