//! fibsvc server binary.
//!
//! Loads config from the environment (and `.env`), then serves `/health`,
//! `/ready`, `/payload`, and `/metrics` until Ctrl+C or SIGTERM.

use tracing_subscriber::{fmt, EnvFilter};

use fibsvc_core::error::{FibsvcError, Result};
use fibsvc_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!(code = e.client_code().as_str(), error = %e, "fibsvc-server exiting");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Config errors abort here, before any listener exists.
    let cfg = config::load_from_env()?;
    let listen = cfg.listen_addr();
    let state = AppState::new(cfg);
    tracing::info!(
        %listen,
        max_random_number = state.cfg().max_random_number,
        metric_decimal_places = ?state.registry().rounding().places(),
        "config loaded"
    );
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| FibsvcError::Bind(format!("{listen}: {e}")))?;
    tracing::info!(%listen, "fibsvc-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FibsvcError::Internal(format!("server failed: {e}")))
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
