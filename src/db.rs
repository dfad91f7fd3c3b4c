// src/db.rs

use std::time::Duration;

use sqlx::{
    AnyPool,
    any::{AnyPoolOptions, install_default_drivers},
    migrate::{MigrateError, Migrator},
};

static POSTGRES_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/postgres");
static SQLITE_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/sqlite");

/// Database backend, chosen from the connection string's scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(database_url: &str) -> Option<Self> {
        let scheme = database_url.split(':').next()?;
        match scheme {
            "postgres" | "postgresql" => Some(Backend::Postgres),
            "sqlite" => Some(Backend::Sqlite),
            _ => None,
        }
    }

    fn migrator(self) -> &'static Migrator {
        match self {
            Backend::Postgres => &POSTGRES_MIGRATIONS,
            Backend::Sqlite => &SQLITE_MIGRATIONS,
        }
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Opens a connection pool for `database_url`.
///
/// An in-memory SQLite database lives as long as its single connection, so
/// that pool is pinned to one connection that never expires.
pub async fn connect(database_url: &str) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();

    let backend = Backend::from_url(database_url).ok_or_else(|| {
        sqlx::Error::Configuration(format!("unsupported database url: {}", database_url).into())
    })?;

    let options = if backend == Backend::Sqlite && is_in_memory(database_url) {
        AnyPoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        AnyPoolOptions::new().max_connections(5)
    };

    options
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
}

/// Applies the migration set matching the backend of `database_url`.
pub async fn migrate(pool: &AnyPool, database_url: &str) -> Result<(), MigrateError> {
    let backend = Backend::from_url(database_url).ok_or_else(|| {
        MigrateError::Source(format!("unsupported database url: {}", database_url).into())
    })?;

    backend.migrator().run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_follows_scheme() {
        assert_eq!(
            Backend::from_url("postgres://trivia@localhost/trivia"),
            Some(Backend::Postgres)
        );
        assert_eq!(
            Backend::from_url("postgresql://localhost/trivia"),
            Some(Backend::Postgres)
        );
        assert_eq!(Backend::from_url("sqlite::memory:"), Some(Backend::Sqlite));
        assert_eq!(Backend::from_url("sqlite://trivia.db"), Some(Backend::Sqlite));
        assert_eq!(Backend::from_url("mysql://localhost/trivia"), None);
    }

    #[tokio::test]
    async fn migrations_seed_categories() {
        let url = "sqlite::memory:";
        let pool = connect(url).await.unwrap();
        migrate(&pool, url).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(count, 6);
    }
}
