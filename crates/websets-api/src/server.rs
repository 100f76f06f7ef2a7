//! API server implementation.

use anyhow::Context;
use axum::http::{header, Method};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use websets_core::config::{Config, ServerConfig};

use crate::routes;
use crate::state::AppState;

/// Cross-origin policy for browser clients served from another origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Router with the cross-cutting layers applied.
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    let router = routes::create_router(state).layer(TraceLayer::new_for_http());
    if server.permissive_cors {
        router.layer(cors_layer())
    } else {
        router
    }
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
pub async fn run(config: &Config, state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    run_on(listener, app(state, &config.server), shutdown_signal()).await
}

/// Serve `app` on an already-bound listener until `shutdown` resolves.
pub async fn run_on<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr()?;
    info!(address = %local, "API available at http://{local}/api");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("API server shut down gracefully");
    Ok(())
}

/// Default shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
