use crate::auth::models::SessionContext;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use detachd_core::{AccessDecision, NavItem, RoutePolicy, Session};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AccessDecisionRequest {
    pub session: Session,
    pub policy: RoutePolicy,
}

#[utoipa::path(
    post,
    path = "/api/v0/access/decide",
    tag = "access",
    request_body = AccessDecisionRequest,
    responses(
        (status = 200, description = "Gate decision for the session and route policy", body = AccessDecision),
        (status = 400, description = "Malformed request", body = ErrorResponse)
    )
)]
pub async fn decide_access(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<AccessDecisionRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let decision = state.gate.decide(&request.session, &request.policy);

    tracing::info!(
        authenticated = request.session.is_authenticated,
        role = request
            .session
            .role
            .as_ref()
            .map(|role| role.as_str())
            .unwrap_or("none"),
        allowed_roles = request.policy.allowed_roles.len(),
        decision = ?decision,
        "Access decided"
    );

    Ok(Json(decision))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NavigationResponse {
    pub role: String,
    pub items: Vec<NavItem>,
}

#[utoipa::path(
    get,
    path = "/api/v0/navigation",
    tag = "access",
    params(
        ("x-detachd-role" = String, Header, description = "Role of the signed-in user")
    ),
    responses(
        (status = 200, description = "Sidebar entries for the session's role", body = NavigationResponse),
        (status = 401, description = "No session", body = ErrorResponse)
    )
)]
pub async fn get_navigation(
    State(state): State<Arc<AppState>>,
    session_ctx: SessionContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let items = state.navigation.items_for(&session_ctx.role).to_vec();

    Ok(Json(NavigationResponse {
        role: session_ctx.role.to_string(),
        items,
    }))
}
