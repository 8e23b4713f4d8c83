use sqlx::{Pool, Sqlite};

#[derive(Debug, Clone)]
pub struct SqlitePersistence {
    pub(crate) pool: Pool<Sqlite>,
}
