//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p detachd-api`.

use axum_test::TestServer;
use detachd_api::setup::routes;
use detachd_api::state::AppState;
use detachd_core::Config;
use detachd_processing::{DocumentRiskEvaluator, FixedSignals, FraudSignalProvider};
use std::sync::Arc;

/// Header carrying the signed-in role.
pub const ROLE_HEADER: &str = "x-detachd-role";

/// Server whose fraud checks never trip; only the size-based quality flag can appear.
pub fn quiet_server() -> TestServer {
    server_with(FixedSignals::never(), Config::default())
}

/// Server whose fraud checks always trip.
pub fn suspicious_server() -> TestServer {
    server_with(FixedSignals::always(), Config::default())
}

pub fn server_with(provider: impl FraudSignalProvider + 'static, config: Config) -> TestServer {
    let evaluator = DocumentRiskEvaluator::new(Arc::new(provider), config.risk.clone());
    let state = Arc::new(AppState::new(config, evaluator));
    let app = routes::setup_routes(state).expect("Failed to build router");
    TestServer::new(app.into_make_service()).expect("Failed to create test server")
}
