use actix_web::{post, web, HttpResponse};
use sumai_common::{Result, SumaiError};

use crate::error::error_response;
use crate::pipeline::validate_text;
use crate::state::AppState;
use crate::types::{SummaryRequest, SummaryResponse};

/// Summarize text with the requested tone, length and purpose
#[post("/summarize")]
pub async fn summarize(
    req: web::Json<SummaryRequest>,
    state: web::Data<AppState>,
) -> HttpResponse {
    match summarize_request(&req, &state).await {
        Ok(summary) => HttpResponse::Ok().json(SummaryResponse { summary }),
        Err(e) => error_response(&e),
    }
}

async fn summarize_request(req: &SummaryRequest, state: &AppState) -> Result<String> {
    let pipeline = state
        .pipeline
        .as_ref()
        .ok_or_else(|| SumaiError::model_unavailable("Summarization model not loaded"))?;

    validate_text(&req.text, state.config.max_input_chars)?;

    pipeline.run(&req.text, req.presentation()).await
}
