use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::models::UserRole;

/// Authentication state of the current session, passed explicitly to the gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub is_authenticated: bool,
    /// A blank role string decodes to no role.
    #[serde(default, deserialize_with = "deserialize_role")]
    #[schema(value_type = Option<String>)]
    pub role: Option<UserRole>,
}

impl Session {
    pub fn authenticated(role: impl Into<UserRole>) -> Self {
        Self {
            is_authenticated: true,
            role: Some(role.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Access policy attached to a protected view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoutePolicy {
    /// Ordered, without duplicates or blank entries.
    #[serde(deserialize_with = "deserialize_allowed_roles")]
    #[schema(value_type = Vec<String>)]
    pub allowed_roles: Vec<UserRole>,
    /// Where to send unauthorized users instead of showing the denial screen.
    #[serde(default)]
    pub redirect_to: Option<String>,
    #[serde(default = "default_show_access_denied")]
    pub show_access_denied: bool,
}

fn default_show_access_denied() -> bool {
    true
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<Option<UserRole>, D::Error>
where
    D: Deserializer<'de>,
{
    let role = Option::<UserRole>::deserialize(deserializer)?;
    Ok(role.filter(|role| !role.is_blank()))
}

fn deserialize_allowed_roles<'de, D>(deserializer: D) -> Result<Vec<UserRole>, D::Error>
where
    D: Deserializer<'de>,
{
    let roles = Vec::<UserRole>::deserialize(deserializer)?;
    Ok(normalize_roles(roles))
}

/// Drop blank and repeated roles, keeping first-seen order.
fn normalize_roles<I>(roles: I) -> Vec<UserRole>
where
    I: IntoIterator<Item = UserRole>,
{
    let mut unique: Vec<UserRole> = Vec::new();
    for role in roles {
        if !role.is_blank() && !unique.contains(&role) {
            unique.push(role);
        }
    }
    unique
}

impl RoutePolicy {
    pub fn new<I, R>(allowed_roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<UserRole>,
    {
        Self {
            allowed_roles: normalize_roles(allowed_roles.into_iter().map(Into::into)),
            redirect_to: None,
            show_access_denied: true,
        }
    }

    pub fn redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }

    pub fn show_access_denied(mut self, show: bool) -> Self {
        self.show_access_denied = show;
        self
    }

    pub fn allows(&self, role: &UserRole) -> bool {
        self.allowed_roles.contains(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_deduplicates_roles_in_order() {
        let policy = RoutePolicy::new(["insurer_admin", "super_admin", "insurer_admin"]);
        assert_eq!(
            policy.allowed_roles,
            vec![UserRole::InsurerAdmin, UserRole::SuperAdmin]
        );
    }

    #[test]
    fn test_policy_deserializes_with_defaults() {
        let policy: RoutePolicy =
            serde_json::from_str(r#"{"allowed_roles":["witness"]}"#).unwrap();
        assert!(policy.show_access_denied);
        assert!(policy.redirect_to.is_none());
        assert!(policy.allows(&UserRole::Witness));
    }

    #[test]
    fn test_policy_deserialization_deduplicates_roles() {
        let policy: RoutePolicy = serde_json::from_str(
            r#"{"allowed_roles":["insurer_admin"," insurer_admin","super_admin","","insurer_admin"]}"#,
        )
        .unwrap();
        assert_eq!(
            policy.allowed_roles,
            vec![UserRole::InsurerAdmin, UserRole::SuperAdmin]
        );
    }

    #[test]
    fn test_blank_session_role_decodes_to_none() {
        for raw in [
            r#"{"is_authenticated":true,"role":""}"#,
            r#"{"is_authenticated":true,"role":"   "}"#,
            r#"{"is_authenticated":true,"role":null}"#,
            r#"{"is_authenticated":true}"#,
        ] {
            let session: Session = serde_json::from_str(raw).unwrap();
            assert_eq!(session.role, None, "{}", raw);
        }

        let session: Session =
            serde_json::from_str(r#"{"is_authenticated":true,"role":" witness "}"#).unwrap();
        assert_eq!(session.role, Some(UserRole::Witness));
    }

    #[test]
    fn test_session_constructors() {
        let session = Session::authenticated("responder");
        assert!(session.is_authenticated);
        assert_eq!(session.role, Some(UserRole::Responder));
        assert_eq!(Session::anonymous().role, None);
    }
}
