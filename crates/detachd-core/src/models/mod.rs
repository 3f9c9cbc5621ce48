//! Data models for the claims core
//!
//! Each sub-module covers one feature area; everything is re-exported here for
//! convenient imports.

mod fraud_flag;
mod risk_score;
mod role;
mod uploaded_file;

pub use fraud_flag::*;
pub use risk_score::*;
pub use role::*;
pub use uploaded_file::*;
