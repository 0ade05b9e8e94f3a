//! MotionForge HTTP server
//!
//! Actix-web REST API: upload, clip generation, static clip serving

pub mod error;
pub mod history;
pub mod routes;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use motionforge_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use error::ApiError;
pub use state::AppState;

/// Register state, API routes and the static clip mounts
pub fn configure(state: Arc<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let clips_dir = state.config.clips_dir.clone();
        let processed_dir = state.config.processed_dir.clone();

        cfg.app_data(web::Data::new(state))
            .service(routes::system::index)
            .service(routes::system::health)
            .service(routes::upload::upload)
            .service(routes::history::get_history)
            // More specific mount first
            .service(Files::new("/clips/processed", processed_dir))
            .service(Files::new("/clips", clips_dir));
    }
}

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!("Upload directory: {}", state.config.upload_dir.display());
    info!("Clips directory: {}", state.config.clips_dir.display());
    info!("Binding HTTP server to {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .configure(configure(state.clone()))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
