use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use indie_game_proxy::{server, DiscoveryEngine, ProxyConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "indie_proxy_server=debug,indie_game_proxy=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ProxyConfig::from_env()?;

    tracing::info!("🚀 Starting Indie Game Proxy");
    tracing::info!("🌐 Upstream: {}", config.base_url);
    tracing::info!("🔌 Port: {}", config.port);

    let engine = Arc::new(DiscoveryEngine::new(&config)?);

    // Stale entries are dropped once per freshness window
    let sweeper = {
        let engine = engine.clone();
        let period = config.cache_ttl();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                match engine.cleanup_cache().await {
                    Ok(0) => {}
                    Ok(removed) => tracing::debug!("🧹 Removed {} stale cache entries", removed),
                    Err(e) => tracing::warn!("Cache sweep failed: {}", e),
                }
            }
        })
    };

    let app = server::router(engine.clone());

    let addr = config.bind_addr();
    tracing::info!("🎮 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    if let Ok(stats) = engine.cache_stats().await {
        tracing::info!(
            "📊 Cache at shutdown: {} entries, {} hits, {} misses",
            stats.total_entries,
            stats.hits,
            stats.misses
        );
    }
    tracing::info!("🛑 Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("🛑 Received shutdown signal");
}
