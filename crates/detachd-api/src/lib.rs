//! Detachd API Library
//!
//! HTTP handlers and application setup for the claims rules service.

mod api_doc;
mod handlers;
pub mod setup;
mod telemetry;

pub mod auth;
pub mod error;
pub mod state;

pub use error::ErrorResponse;
pub use setup::routes::setup_routes;
pub use state::AppState;
