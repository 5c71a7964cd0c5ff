//! HTTP request handlers for the payroll calendar API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::fetch_year_payroll;
use crate::error::EngineResult;
use crate::models::YearPayroll;

use super::request::{PayrollPathParams, PayrollRequest};
use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/:salary", get(year_payroll_handler))
        .route("/api/:salary/:year", get(year_payroll_handler))
        .with_state(state)
}

/// Handler for GET /api/:salary and GET /api/:salary/:year.
///
/// Returns the advance and rest split for every month of the year.
async fn year_payroll_handler(
    State(state): State<AppState>,
    Path(params): Path<PayrollPathParams>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing year payroll request");

    let start_time = Instant::now();
    match perform_calculation(&state, params).await {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                year = result.year,
                salary = %result.salary,
                months = result.months.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Year payroll computed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Year payroll failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Validates the request, then fetches the calendar and computes the year.
async fn perform_calculation(
    state: &AppState,
    params: PayrollPathParams,
) -> EngineResult<YearPayroll> {
    let request = PayrollRequest::try_from(params)?;

    fetch_year_payroll(
        state.provider(),
        request.year,
        request.salary,
        state.policy(),
    )
    .await
}
