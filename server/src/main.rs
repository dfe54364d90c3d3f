use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_server::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todo_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}");

    todo_server::run_with_shutdown(listener, todo_server::app(), shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to install Ctrl-C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
