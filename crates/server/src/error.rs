use actix_web::http::StatusCode;
use actix_web::{error, HttpRequest, HttpResponse};
use sumai_common::SumaiError;
use tracing::warn;

use crate::types::ErrorResponse;

/// Render an error as `{"detail": ...}` with its mapped status code
pub fn error_response(err: &SumaiError) -> HttpResponse {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status).json(ErrorResponse {
        detail: err.detail(),
    })
}

/// Malformed or incomplete JSON bodies become 422 with the parser message
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    warn!("Rejected request body: {}", detail);

    let response = HttpResponse::UnprocessableEntity().json(ErrorResponse { detail });
    error::InternalError::from_response(err, response).into()
}
