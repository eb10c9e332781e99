//! Connection pool, schema bootstrap and the per-request session.
//!
//! # Design
//! A `Session` is one pooled SQLite connection acquired by the extractor when
//! a handler runs. It is handed back to the pool when the handler's future is
//! dropped, so every exit path releases it, errors included. Each statement
//! runs in autocommit mode; nothing here opens a transaction.

use std::{
    ops::{Deref, DerefMut},
    str::FromStr,
};

use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    ConnectOptions, Sqlite, SqliteConnection, SqlitePool,
};
use todo_core::MAX_CONTENTS_LEN;

use crate::{config::ServerConfig, error::AppError, repository::DbError, AppState};

fn schema() -> String {
    format!(
        r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    contents VARCHAR({max}) NOT NULL CHECK (length(contents) BETWEEN 1 AND {max}),
    is_done BOOLEAN NOT NULL
)
"#,
        max = MAX_CONTENTS_LEN
    )
}

/// Open the pool described by `config`.
///
/// In-memory databases live and die with their connection, so they get a
/// single connection that is never recycled.
pub async fn create_pool(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    let mut options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    if !config.echo_sql {
        options = options.disable_statement_logging();
    }

    let pool = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    tracing::debug!(
        url = %config.database_url,
        in_memory = config.is_in_memory(),
        "opening database pool"
    );
    pool.connect_with(options).await
}

/// Create the `todos` table if it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(&schema()).execute(pool).await?;
    Ok(())
}

/// A database session scoped to one request.
pub struct Session(PoolConnection<Sqlite>);

impl Session {
    pub async fn acquire(pool: &SqlitePool) -> Result<Self, DbError> {
        Ok(Self(pool.acquire().await?))
    }
}

impl Deref for Session {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Session::acquire(state.pool()).await?)
    }
}
