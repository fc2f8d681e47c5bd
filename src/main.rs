use std::net::SocketAddr;
use std::sync::Arc;

use bunner_cors_proxy::{ForwardingProxy, HttpUpstream, ProxyOptions, env, server};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG="bunner_cors_proxy=debug" shows every forwarding decision
    configure_tracing_subscriber();

    let options = ProxyOptions::from_env()?;
    let upstream = HttpUpstream::from_options(&options)?;
    let proxy = Arc::new(ForwardingProxy::new(options, upstream)?);

    let addr: SocketAddr = std::env::var(env::BIND_ADDR)
        .unwrap_or_else(|_| env::DEFAULT_BIND_ADDR.to_string())
        .parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, upstream = %proxy.upstream_url(), "proxy listening");

    axum::serve(listener, server::router(proxy))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("proxy stopped");
    Ok(())
}

fn configure_tracing_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
