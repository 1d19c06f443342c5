//! SQLite connection pooling and connection-string resolution.

use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use thiserror::Error;

/// Shared r2d2 pool handle. Cheap to clone; one per process.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
/// A connection checked out of the pool.
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Connection string used when `DATABASE_URL` is unset in development.
pub const DEFAULT_DATABASE_URL: &str = "vitrine.db";

/// Deployment mode, selected by the `APP_ENV` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    /// Reads `APP_ENV`; anything other than `production` is development.
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Errors raised while resolving configuration or building the pool.
#[derive(Debug, Error)]
pub enum DbError {
    /// `DATABASE_URL` is mandatory in production; there is no safe default
    /// connection string to fall back to there.
    #[error("DATABASE_URL is required in production")]
    MissingDatabaseUrl,
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Resolves the active connection string from the environment.
///
/// Development falls back to a local SQLite file so the storefront runs
/// without any setup; production refuses to start without explicit
/// configuration.
pub fn resolve_database_url(env: AppEnv) -> Result<String, DbError> {
    match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => Ok(url),
        _ => match env {
            AppEnv::Development => Ok(DEFAULT_DATABASE_URL.to_string()),
            AppEnv::Production => Err(DbError::MissingDatabaseUrl),
        },
    }
}

/// Builds the r2d2 pool for the given connection string.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, DbError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Ok(Pool::builder().build(manager)?)
}
