//! Role-based access gate for protected views.
//!
//! The gate is a pure function of `(session, policy)`: it holds no state
//! beyond the configured fallback paths, so identical inputs always produce
//! the identical [`AccessDecision`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::policy::{RoutePolicy, Session};
use crate::constants::{DEFAULT_DASHBOARD_PATH, DEFAULT_LOGIN_PATH};
use crate::models::UserRole;

/// What the view layer should do for one access attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AccessDecision {
    /// Render the protected content unchanged.
    Render,
    /// Navigate away. `replace` means the history entry is replaced, not pushed.
    Redirect { to: String, replace: bool },
    /// Show the access-denied view.
    AccessDenied(DenialScreen),
}

impl AccessDecision {
    fn redirect(to: impl Into<String>) -> Self {
        AccessDecision::Redirect {
            to: to.into(),
            replace: true,
        }
    }

    pub fn is_render(&self) -> bool {
        matches!(self, AccessDecision::Render)
    }
}

/// Content of the access-denied view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DenialScreen {
    pub title: String,
    pub message: String,
    #[schema(value_type = Vec<String>)]
    pub allowed_roles: Vec<UserRole>,
    #[schema(value_type = String)]
    pub actual_role: UserRole,
    pub go_back_label: String,
}

impl DenialScreen {
    fn new(allowed_roles: &[UserRole], actual_role: &UserRole) -> Self {
        let required = allowed_roles
            .iter()
            .map(UserRole::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            title: "Access Denied".to_string(),
            message: format!(
                "You don't have permission to access this page. Required role(s): {}. Your role: {}.",
                required, actual_role
            ),
            allowed_roles: allowed_roles.to_vec(),
            actual_role: actual_role.clone(),
            go_back_label: "Go Back".to_string(),
        }
    }
}

/// Fallback navigation targets used by the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePaths {
    pub login: String,
    pub dashboard: String,
}

impl Default for GatePaths {
    fn default() -> Self {
        Self {
            login: DEFAULT_LOGIN_PATH.to_string(),
            dashboard: DEFAULT_DASHBOARD_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    paths: GatePaths,
}

impl AccessGate {
    pub fn new(paths: GatePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &GatePaths {
        &self.paths
    }

    /// Decide access in priority order: authentication, membership, explicit
    /// redirect, denial screen, dashboard fallback. A blank role counts as no role.
    pub fn decide(&self, session: &Session, policy: &RoutePolicy) -> AccessDecision {
        let role = match (&session.role, session.is_authenticated) {
            (Some(role), true) if !role.is_blank() => role,
            _ => return AccessDecision::redirect(&self.paths.login),
        };

        if policy.allows(role) {
            return AccessDecision::Render;
        }

        if let Some(target) = &policy.redirect_to {
            return AccessDecision::redirect(target);
        }

        if policy.show_access_denied {
            return AccessDecision::AccessDenied(DenialScreen::new(&policy.allowed_roles, role));
        }

        AccessDecision::redirect(&self.paths.dashboard)
    }
}

/// Decide access with the default `/login` and `/dashboard` fallbacks.
pub fn decide_access(session: &Session, policy: &RoutePolicy) -> AccessDecision {
    AccessGate::default().decide(session, policy)
}
