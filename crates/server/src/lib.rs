//! SumAI HTTP Server
//!
//! Actix-web REST API exposing `POST /summarize`

pub mod error;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_support;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use sumai_common::{AppConfig, Result};
use sumai_llm::SummaryModel;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use pipeline::{validate_text, SummaryPipeline};
pub use state::AppState;

/// CORS policy for the configured origins
///
/// A `*` entry allows any origin, without credentials.
pub fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    origins
        .iter()
        .fold(cors.supports_credentials(), |cors, origin| {
            cors.allowed_origin(origin)
        })
}

/// Run the HTTP server until shutdown
///
/// `model` is `None` when the model failed to load; the server still starts
/// and reports it through `/health`.
pub async fn start_server(config: AppConfig, model: Option<Arc<dyn SummaryModel>>) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let origins = config.cors_origins.clone();
    let state = web::Data::new(AppState::new(config, model));

    info!(
        "Starting HTTP server on {} (model loaded: {}, CORS origins: {:?})",
        bind_addr,
        state.model_loaded(),
        origins
    );

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&origins))
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
