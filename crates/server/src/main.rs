mod auth;
mod config;
mod http;
mod state;

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use auth::TokenGuard;
use config::Settings;
use http::router::build_router;
use service::{build_processor, CommentService, ProcessorConfig};
use state::AppState;
use storage::Db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::new().context("Failed to load configuration")?;

    let db = Db::new(&settings.database.url).await?;

    let processor_config = match settings.processor {
        config::ProcessorSettings::Echo { text } => ProcessorConfig::Echo { text },
        config::ProcessorSettings::Identity => ProcessorConfig::Identity,
    };
    let processor = build_processor(processor_config);

    let service = CommentService::new(Arc::new(db), processor);

    let state = AppState {
        service,
        auth: TokenGuard::new(settings.security.jwt_secret),
    };

    let app = build_router(state, &settings.server.cors_origins);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address: {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
