//! HTTP request handlers for the Deduction Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_deduction, MANUAL_REVIEW_LABEL};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DeductionReport, DeductionResult, DeductionTotals, ExpenseRecord, WorkUseSource,
    WorkUseSummary,
};
use crate::rules::RuleLoader;
use crate::worklog::{calculate, filter_by_financial_year, parse_json_document, resolve};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health endpoint.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "engine_version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the deduction report.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();

    // Resolve the work-use percentage once for the whole run
    let work_use = match resolve_work_use(&request) {
        Ok(work_use) => work_use,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Work-use resolution failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let expenses: Vec<ExpenseRecord> = request.expenses.into_iter().map(Into::into).collect();

    // Perform the calculation
    match build_report(&expenses, work_use, state.rules()) {
        Ok(report) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                expense_count = expenses.len(),
                work_use_percentage = %report.work_use.percentage,
                total_deductible = %report.totals.total_deductible,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
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

/// Resolves the work-use percentage from the request's single source.
///
/// A static percentage is validated and used as-is; a work log is parsed,
/// optionally narrowed to its stated financial year, and aggregated. The
/// full log statistics ride along in the summary for the report.
fn resolve_work_use(request: &CalculationRequest) -> EngineResult<WorkUseSummary> {
    match (request.work_use_percentage, &request.work_log) {
        (static_percentage, None) => {
            let percentage = resolve(static_percentage, None)?;
            Ok(WorkUseSummary {
                percentage,
                source: WorkUseSource::Static,
                log_summary: None,
            })
        }
        (None, Some(document)) => {
            let entries = parse_json_document(document)?;
            let entries = match &document.financial_year {
                Some(label) => filter_by_financial_year(&entries, label)?,
                None => entries,
            };
            let summary = calculate(&entries)?;
            Ok(WorkUseSummary {
                percentage: summary.percentage,
                source: WorkUseSource::WorkLog,
                log_summary: Some(summary),
            })
        }
        (Some(_), Some(_)) => Err(EngineError::AmbiguousWorkUseInput),
    }
}

/// Builds the deduction report for a batch of expenses.
fn build_report(
    expenses: &[ExpenseRecord],
    work_use: WorkUseSummary,
    rules: &RuleLoader,
) -> EngineResult<DeductionReport> {
    let mut deductions: Vec<DeductionResult> = Vec::with_capacity(expenses.len());
    for expense in expenses {
        deductions.push(calculate_deduction(
            expense,
            work_use.percentage,
            rules.ruleset(),
        )?);
    }

    let total_amount: Decimal = deductions.iter().map(|d| d.total_amount).sum();
    let total_deductible: Decimal = deductions.iter().map(|d| d.deductible_amount).sum();
    let manual_review_count = deductions
        .iter()
        .filter(|d| d.claim_method == MANUAL_REVIEW_LABEL)
        .count();

    Ok(DeductionReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        work_use,
        totals: DeductionTotals {
            total_amount,
            total_deductible,
            expense_count: deductions.len(),
            manual_review_count,
        },
        deductions,
    })
}
