use super::types::{AnalyzeRequest, ErrorResponse, HealthResponse, RootResponse, SERVICE_MESSAGE};
use crate::{Error, analysis::Analyzer};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::{Method, StatusCode, Uri},
    response::Json,
};
use serde_json::Value;
use std::{sync::Arc, time::Instant};
use tracing::{error, info, warn};
use uuid::Uuid;

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_MESSAGE.to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected analyze request body: {}", rejection.body_text());
        (
            rejection.status(),
            Json(ErrorResponse::new(rejection.body_text())),
        )
    })?;

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        "Received analyze request for company: {} ({})",
        request.company_name, request.business_type
    );

    let started = Instant::now();
    match state.analyzer.analyze(&request).await {
        Ok(analysis) => {
            info!(
                %request_id,
                "Analysis for {} completed in {}ms",
                request.company_name,
                started.elapsed().as_millis()
            );
            Ok(Json(analysis))
        }
        Err(e) => {
            error!(%request_id, "Analysis for {} failed: {}", request.company_name, e);
            Err(error_response(&e))
        }
    }
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new(format!(
            "Method {} not allowed for {}",
            method,
            uri.path()
        ))),
    )
}

pub async fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found")))
}

fn error_response(e: &Error) -> ApiError {
    let detail = if e.is_model_output() {
        e.to_string()
    } else {
        format!("Internal server error: {}", e)
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(detail)),
    )
}
