//! Role-keyed navigation menus.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::models::UserRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    /// Icon key understood by the front-end icon set.
    pub icon: String,
}

impl NavItem {
    pub fn new(label: &str, path: &str, icon: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Lookup table from role to its sidebar entries.
///
/// Roles without an entry (including unknown roles) get the fallback menu.
#[derive(Debug, Clone)]
pub struct NavigationTable {
    menus: HashMap<UserRole, Vec<NavItem>>,
    fallback: Vec<NavItem>,
}

impl NavigationTable {
    pub fn new(fallback: Vec<NavItem>) -> Self {
        Self {
            menus: HashMap::new(),
            fallback,
        }
    }

    pub fn with_menu(mut self, role: UserRole, items: Vec<NavItem>) -> Self {
        self.menus.insert(role, items);
        self
    }

    pub fn items_for(&self, role: &UserRole) -> &[NavItem] {
        self.menus
            .get(role)
            .map(Vec::as_slice)
            .unwrap_or(&self.fallback)
    }

    pub fn has_menu(&self, role: &UserRole) -> bool {
        self.menus.contains_key(role)
    }
}

impl Default for NavigationTable {
    fn default() -> Self {
        let dashboard = || NavItem::new("Dashboard", "/dashboard", "home");
        let notifications = || NavItem::new("Notifications", "/notifications", "bell");
        let settings = || NavItem::new("Settings", "/settings", "settings");

        let insurer_menu = vec![
            dashboard(),
            NavItem::new("Claims Review", "/claims", "clipboard"),
            NavItem::new("Policy Management", "/policies/manage", "shield"),
            NavItem::new("Fraud Alerts", "/fraud-alerts", "alert-triangle"),
            NavItem::new("Reports", "/reports", "bar-chart"),
            notifications(),
            settings(),
        ];

        NavigationTable::new(vec![dashboard(), settings()])
            .with_menu(
                UserRole::Policyholder,
                vec![
                    dashboard(),
                    NavItem::new("My Claims", "/claims", "file-text"),
                    NavItem::new("Submit Claim", "/claims/new", "plus-circle"),
                    NavItem::new("My Policies", "/policies", "shield"),
                    notifications(),
                    settings(),
                ],
            )
            .with_menu(UserRole::InsurerParty, insurer_menu.clone())
            .with_menu(UserRole::InsurerAgent, insurer_menu.clone())
            .with_menu(UserRole::InsurerAdmin, insurer_menu)
            .with_menu(
                UserRole::SuperAdmin,
                vec![
                    dashboard(),
                    NavItem::new("User Management", "/admin/users", "users"),
                    NavItem::new("Claims", "/claims", "clipboard"),
                    NavItem::new("Policies", "/policies/manage", "shield"),
                    NavItem::new("Audit Log", "/admin/audit", "list"),
                    NavItem::new("System Settings", "/admin/settings", "sliders"),
                ],
            )
            .with_menu(
                UserRole::Witness,
                vec![
                    dashboard(),
                    NavItem::new("My Statements", "/statements", "message-square"),
                    notifications(),
                ],
            )
            .with_menu(
                UserRole::ThirdParty,
                vec![
                    dashboard(),
                    NavItem::new("Related Claims", "/claims", "file-text"),
                    notifications(),
                ],
            )
            .with_menu(
                UserRole::Responder,
                vec![
                    dashboard(),
                    NavItem::new("Incident Reports", "/incidents", "activity"),
                    notifications(),
                ],
            )
            .with_menu(
                UserRole::MedicalProfessional,
                vec![
                    dashboard(),
                    NavItem::new("Medical Reports", "/medical-reports", "heart"),
                    NavItem::new("Assigned Claims", "/claims", "clipboard"),
                    notifications(),
                ],
            )
            .with_menu(
                UserRole::LegalProfessional,
                vec![
                    dashboard(),
                    NavItem::new("Cases", "/cases", "briefcase"),
                    NavItem::new("Documents", "/documents", "folder"),
                    notifications(),
                ],
            )
            .with_menu(
                UserRole::GovernmentOfficial,
                vec![
                    dashboard(),
                    NavItem::new("Verifications", "/verifications", "check-circle"),
                    NavItem::new("Reports", "/reports", "bar-chart"),
                    notifications(),
                ],
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_role_has_a_menu() {
        let table = NavigationTable::default();
        for role in UserRole::KNOWN.iter() {
            assert!(table.has_menu(role), "missing menu for {}", role);
            assert_eq!(table.items_for(role)[0].path, "/dashboard");
        }
    }

    #[test]
    fn test_unknown_role_gets_fallback() {
        let table = NavigationTable::default();
        let items = table.items_for(&UserRole::from("auditor"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Dashboard");
    }

    #[test]
    fn test_insurer_roles_share_menu() {
        let table = NavigationTable::default();
        assert_eq!(
            table.items_for(&UserRole::InsurerAdmin),
            table.items_for(&UserRole::InsurerAgent)
        );
        assert!(table
            .items_for(&UserRole::InsurerAdmin)
            .iter()
            .any(|item| item.path == "/fraud-alerts"));
    }

    #[test]
    fn test_custom_table() {
        let table = NavigationTable::new(vec![])
            .with_menu(UserRole::Witness, vec![NavItem::new("Home", "/", "home")]);
        assert_eq!(table.items_for(&UserRole::Witness).len(), 1);
        assert!(table.items_for(&UserRole::Policyholder).is_empty());
    }
}
