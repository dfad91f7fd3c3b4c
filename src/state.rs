// src/state.rs

use axum::extract::FromRef;
use sqlx::AnyPool;

use crate::db;

/// Shared by every request: the connection pool, nothing else.
#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
}

impl AppState {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Connects to `database_url` and brings its schema up to date.
    pub async fn connect(database_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = db::connect(database_url).await?;
        db::migrate(&pool, database_url).await?;
        Ok(Self::new(pool))
    }
}

impl FromRef<AppState> for AnyPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
