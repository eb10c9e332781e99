use tokio::net::TcpListener;
use todo_server::{telemetry, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    telemetry::init_tracing(&config)?;

    let state = todo_server::connect(&config).await?;
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    todo_server::run(listener, state).await?;
    Ok(())
}
