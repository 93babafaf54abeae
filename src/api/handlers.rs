use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::analysis::{build_summary, forecast};
use crate::lookup;

use super::AppState;

#[derive(Deserialize)]
pub struct CodeQuery {
    pub code: Option<String>,
}

#[derive(Deserialize)]
pub struct KeywordQuery {
    pub keyword: Option<String>,
}

pub async fn home() -> impl IntoResponse {
    Json(json!({"message": "Welcome to Stock Analysis API"}))
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CodeQuery>,
) -> impl IntoResponse {
    let Some(code) = required_param(params.code.as_deref()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Stock code is required"})),
        );
    };

    let series = state.provider.fetch_daily(code).await;
    match build_summary(series.as_ref()) {
        Ok(summary) => {
            let body = serde_json::to_value(summary)
                .unwrap_or_else(|e| json!({"error": format!("Analysis failed: {}", e)}));
            (StatusCode::OK, Json(body))
        }
        // Computed failures keep a 200 status; only a missing parameter is a
        // client error.
        Err(e) => {
            tracing::warn!(code, error = %e, "analyze request failed");
            (StatusCode::OK, Json(json!({"error": e.to_string()})))
        }
    }
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CodeQuery>,
) -> impl IntoResponse {
    let Some(code) = required_param(params.code.as_deref()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Stock code is required"})),
        );
    };

    let series = state.provider.fetch_daily(code).await;
    match forecast(series.as_ref()) {
        Ok(result) => {
            let body = serde_json::to_value(result)
                .unwrap_or_else(|e| json!({"error": format!("Prediction failed: {}", e)}));
            (StatusCode::OK, Json(body))
        }
        Err(e) => {
            tracing::warn!(code, error = %e, "predict request failed");
            (StatusCode::OK, Json(json!({"error": e.to_string()})))
        }
    }
}

pub async fn search(Query(params): Query<KeywordQuery>) -> impl IntoResponse {
    let Some(keyword) = required_param(params.keyword.as_deref()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Keyword is required"})),
        );
    };

    (StatusCode::OK, Json(json!(lookup::search(keyword))))
}

/// A blank or whitespace-only value counts as missing.
fn required_param(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
