use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::{HealthResponse, RootResponse};

/// Liveness message
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(RootResponse {
        message: "SumAI API is running".to_string(),
        status: "healthy".to_string(),
    })
}

/// Service and model status
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let model = state.pipeline.as_ref().map(|pipeline| pipeline.model());

    let message = if model.is_some() {
        "SumAI API is ready to generate summaries"
    } else {
        "Summarization model not loaded"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: state.model_loaded(),
        backend: model.map(|m| m.backend().to_string()),
        model: model.map(|m| m.model_name().to_string()),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubModel;
    use actix_web::{test, App};
    use std::sync::Arc;
    use sumai_common::AppConfig;
    use sumai_llm::SummaryModel;

    #[actix_web::test]
    async fn test_root() {
        let app = test::init_service(App::new().service(root)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body: RootResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
    }

    #[actix_web::test]
    async fn test_health_with_model() {
        let model: Arc<dyn SummaryModel> = Arc::new(StubModel::replying("x"));
        let state = AppState::new(AppConfig::default(), Some(model));
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(health),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert!(body.model_loaded);
        assert_eq!(body.model.as_deref(), Some("stub"));
        assert_eq!(body.backend.as_deref(), Some("huggingface"));
    }

    #[actix_web::test]
    async fn test_health_without_model() {
        let state = AppState::new(AppConfig::default(), None);
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(health),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert!(!body.model_loaded);
        assert_eq!(body.model, None);
        assert_eq!(body.message, "Summarization model not loaded");
    }
}
