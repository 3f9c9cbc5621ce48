//! Access control: session/policy inputs, the RBAC gate, and navigation menus.

mod gate;
mod navigation;
mod policy;

pub use gate::{decide_access, AccessDecision, AccessGate, DenialScreen, GatePaths};
pub use navigation::{NavItem, NavigationTable};
pub use policy::{RoutePolicy, Session};
