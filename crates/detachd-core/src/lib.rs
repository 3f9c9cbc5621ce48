//! Detachd Core Library
//!
//! This crate provides the domain models, access-control decisions, error types
//! and configuration shared by every Detachd component.

pub mod access;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use access::{
    decide_access, AccessDecision, AccessGate, DenialScreen, GatePaths, NavItem,
    NavigationTable, RoutePolicy, Session,
};
pub use config::{AccessConfig, BaseConfig, Config, RiskConfig, UploadConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
