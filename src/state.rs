// src/state.rs
use sqlx::SqlitePool;

/// Estado partilhado por todos os handlers. O pool é criado uma vez no arranque.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }
}
