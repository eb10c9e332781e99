//! Tracing setup for the server binary.
//!
//! `RUST_LOG` wins when set; otherwise `info` for everything plus request
//! spans from `tower_http`. With `TODO_ECHO_SQL` on, sqlx statement logs are
//! let through as well.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

const DEFAULT_FILTER: &str = "info,tower_http=debug";

pub fn env_filter(config: &ServerConfig) -> Result<EnvFilter> {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    if config.echo_sql {
        filter = filter.add_directive("sqlx::query=debug".parse()?);
    }
    Ok(filter)
}

pub fn init_tracing(config: &ServerConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
