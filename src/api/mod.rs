//! HTTP API module for the tax engine.
//!
//! This module provides the REST endpoints that compare a taxpayer's
//! liability under the pre-2026 and 2026 Nigerian tax laws.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
