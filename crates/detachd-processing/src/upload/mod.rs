//! Upload set lifecycle for a claim's upload step.

mod set;

pub use set::{BatchOutcome, UploadRejection, UploadSet};
