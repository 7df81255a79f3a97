//! memstat server
//!
//! Accepts `POST /update/<kind>/<name>/<value>` and keeps the latest counter
//! and gauge values in memory.

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use memstat_core::error::{MemstatError, Result};
use memstat_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = AppState::new(config::load_or_default(config::DEFAULT_PATH)?);
    let listen = state.cfg().server.listen_addr()?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "memstat-server starting");
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| MemstatError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MemstatError::Internal(format!("server failed: {e}")))?;

    let store = state.store();
    tracing::info!(
        counters = store.counters_len(),
        gauges = store.gauges_len(),
        "memstat-server stopped"
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
