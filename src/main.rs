use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use metro_kms::app::auth::AuthService;
use metro_kms::config::AppConfig;
use metro_kms::{http, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config);

    let auth = AuthService::new(
        state.storage.clone(),
        state.session.clone(),
        state.simulated_latency,
    );
    if let Err(err) = auth.restore().await {
        tracing::warn!(error = ?err, "failed to restore session");
    }

    let mut app: Router = http::router(state.clone()).layer(TraceLayer::new_for_http());
    if config.cors_allow_any_origin {
        app = app.layer(CorsLayer::permissive());
    }

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(
        storage = %state.storage.path().display(),
        "listening on {}",
        config.http_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let cancelled = state.upload_tasks.cancel_all();
    if cancelled > 0 {
        tracing::info!(cancelled, "cancelled in-flight upload jobs");
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
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
