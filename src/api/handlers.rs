//! HTTP request handlers for the tax engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::compare_regimes;
use crate::models::CalculationResponse;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/regimes", get(regimes_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a tax type and its figures and returns the results under both
/// regimes with their comparison.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::invalid_input(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let input = match request.to_input() {
        Ok(input) => input,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected calculation input"
            );
            let api_error: ApiErrorResponse = err.into();
            return json_response(api_error.status, api_error.error);
        }
    };

    let start_time = Instant::now();
    let result = compare_regimes(&input, state.rules());
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        tax_type = %input.tax_type(),
        tax_difference = %result.tax_difference(),
        recommendation = result.recommendation().as_str(),
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    json_response(StatusCode::OK, CalculationResponse::new(result))
}

/// Handler for GET /regimes endpoint.
///
/// Returns the rule bundles the server calculates with.
async fn regimes_handler(State(state): State<AppState>) -> Response {
    debug!("Serving regime rules");
    json_response(StatusCode::OK, state.rules().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::builtin())
    }

    fn decimal_at(value: &Value, pointer: &str) -> Decimal {
        let text = value
            .pointer(pointer)
            .and_then(Value::as_str)
            .unwrap_or_else(|| panic!("missing decimal at {}", pointer));
        Decimal::from_str(text).unwrap()
    }

    async fn post_calculate(body: impl Into<Body>) -> (StatusCode, Value) {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_valid_pit_request_returns_200() {
        let body = json!({
            "tax_type": "PIT",
            "basic_salary": 1000000,
            "housing_allowance": 600000
        });

        let (status, result) = post_calculate(body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["tax_type"], "PIT");
        assert_eq!(result["old"]["law"], "OLD");
        assert_eq!(result["new"]["law"], "NEW");
        assert_eq!(decimal_at(&result, "/new/net_income"), Decimal::from(1_470_000));
        assert_eq!(
            result["comparison"]["recommendation"],
            "Better under NEW law"
        );
        assert!(result["calculation_id"].is_string());
    }

    #[tokio::test]
    async fn test_valid_request_sets_json_content_type() {
        let router = create_router(create_test_state());
        let body = json!({"tax_type": "CIT", "turnover": 1, "profit": 1});

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, error) = post_calculate("{invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .body(Body::from(r#"{"tax_type":"PIT"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_unknown_tax_type_returns_400() {
        let body = json!({"tax_type": "VAT", "turnover": 1000});

        let (status, error) = post_calculate(body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "UNKNOWN_TAX_TYPE");
    }

    #[tokio::test]
    async fn test_non_numeric_field_returns_400() {
        let body = json!({"tax_type": "PIT", "basic_salary": "lots"});

        let (status, error) = post_calculate(body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "INVALID_INPUT");
        assert!(error["message"].as_str().unwrap().contains("basic_salary"));
    }

    #[tokio::test]
    async fn test_non_string_tax_type_returns_400() {
        let body = json!({"tax_type": 7, "turnover": 1000});

        let (status, error) = post_calculate(body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_regimes_lists_both_bundles() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/regimes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let rules: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(rules["old"]["regime"], "OLD");
        assert_eq!(rules["new"]["regime"], "NEW");
        assert_eq!(rules["new"]["pit"]["brackets"].as_array().unwrap().len(), 6);
    }
}
