//! HTTP API module for the payroll calendar engine.
//!
//! This module exposes the year payroll computation as a JSON endpoint.
//! Page rendering and static assets are left to the presentation layer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayrollPathParams, PayrollRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
