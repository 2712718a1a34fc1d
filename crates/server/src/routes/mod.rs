use actix_web::web;

use crate::error::json_error_handler;

pub mod summarize;
pub mod system;

/// Largest accepted JSON body
const JSON_BODY_LIMIT: usize = 256 * 1024;

/// JSON extractor settings shared by all routes
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(json_error_handler)
}

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(system::root)
        .service(system::health)
        .service(summarize::summarize);
}
