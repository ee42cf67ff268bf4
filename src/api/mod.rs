//! HTTP API module for the Deduction Calculation Engine.
//!
//! This module provides the REST API endpoints for calculating
//! work-related expense deductions under the ATO category rules.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
