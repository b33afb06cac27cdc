//! HTTP API module for the salary calculator.
//!
//! This module exposes the calculation engine as a JSON endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse, ENGINE_VERSION};
pub use state::AppState;
