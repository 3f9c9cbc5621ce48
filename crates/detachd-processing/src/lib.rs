//! Detachd Processing Library
//!
//! Upload validation, document fraud-risk flagging and the upload set that
//! ties them together for a claim.

pub mod risk;
pub mod upload;
pub mod validator;

pub use risk::{
    aggregate_risk_delta, DocumentRiskEvaluator, FixedSignals, FraudCheck, FraudSignalProvider,
    RandomSignals, SeededSignals,
};
pub use upload::{BatchOutcome, UploadRejection, UploadSet};
pub use validator::{content_type_for_filename, UploadValidator, ValidationError};
