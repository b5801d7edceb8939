//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    let state = build_state(&config).await?;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(feature = "postgres")]
async fn build_state(config: &AppConfig) -> std::io::Result<AppState> {
    match &config.database {
        Some(db_config) => AppState::connect(db_config).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
            std::io::Error::other(e.to_string())
        }),
        None => {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            Ok(AppState::in_memory())
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn build_state(config: &AppConfig) -> std::io::Result<AppState> {
    if config.database.is_some() {
        tracing::warn!("DATABASE_URL ignored - built without the postgres feature");
    }
    Ok(AppState::in_memory())
}
