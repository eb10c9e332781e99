//! HTTP server for the to-do API, backed by SQLite.
//!
//! The router is built from `todo_core::ROUTES`; each `Endpoint` maps to one
//! handler in [`handlers`]. Handlers get a per-request [`db::Session`] from
//! the pool held in [`AppState`].

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod repository;
pub mod telemetry;

use axum::{
    routing::{MethodFilter, MethodRouter},
    Router,
};
use sqlx::SqlitePool;
use todo_core::{routes::routes_by_pattern, Endpoint, HttpMethod};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::AppError;
pub use repository::DbError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Open the database described by `config` and make sure the schema exists.
pub async fn connect(config: &ServerConfig) -> Result<AppState, DbError> {
    let pool = db::create_pool(config).await?;
    db::init_schema(&pool).await?;
    Ok(AppState::new(pool))
}

pub fn app(state: AppState) -> Router {
    let mut router = Router::new();
    for (pattern, routes) in routes_by_pattern() {
        let method_router = routes
            .iter()
            .fold(MethodRouter::new(), |method_router, route| {
                bind(method_router, route.method, route.endpoint)
            });
        router = router.route(pattern, method_router);
    }

    router
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn bind(
    method_router: MethodRouter<AppState>,
    method: HttpMethod,
    endpoint: Endpoint,
) -> MethodRouter<AppState> {
    let filter = match method {
        HttpMethod::Get => MethodFilter::GET,
        HttpMethod::Post => MethodFilter::POST,
        HttpMethod::Patch => MethodFilter::PATCH,
        HttpMethod::Delete => MethodFilter::DELETE,
    };
    match endpoint {
        Endpoint::Health => method_router.on(filter, handlers::health),
        Endpoint::ListTodos => method_router.on(filter, handlers::list_todos),
        Endpoint::GetTodo => method_router.on(filter, handlers::get_todo),
        Endpoint::CreateTodo => method_router.on(filter, handlers::create_todo),
        Endpoint::UndoneTodo => method_router.on(filter, handlers::undone_todo),
        Endpoint::DeleteTodo => method_router.on(filter, handlers::delete_todo),
    }
}

/// Serve `state` on `listener` until Ctrl+C or SIGTERM.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
