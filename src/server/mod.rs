//! HTTP server for the contact registry.
//!
//! This module wires the handlers into an `axum` router and runs it until a
//! shutdown signal arrives.

pub mod handlers;
pub mod views;

pub use handlers::AppState;

use anyhow::Result;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", get(handlers::add_form).post(handlers::add_contact))
        .route(
            "/edit/:id",
            get(handlers::edit_form).post(handlers::edit_contact),
        )
        .route("/delete/:id", get(handlers::delete_contact))
        .route("/export", get(handlers::export_contacts))
        .with_state(state)
}

/// Serve `app` on `listener` until Ctrl-C or SIGTERM.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn run_server(listener: TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}
