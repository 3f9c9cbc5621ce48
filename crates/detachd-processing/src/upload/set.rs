//! Upload set for one claim's upload step. Candidates are validated, then
//! evaluated, then held.
//!
//! Files are validated one by one. A rejected file does not stop the rest of
//! the batch; it is reported with its user-facing message and contributes no
//! flags. Accepted files are evaluated once and keep their flags until they
//! are removed or the set is dropped.

use detachd_core::models::{DocumentFraudFlag, RiskScore, UploadCandidate, UploadKind, UploadedFile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::risk::DocumentRiskEvaluator;
use crate::validator::{UploadValidator, ValidationError};

/// A file refused at validation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRejection {
    pub filename: String,
    pub message: String,
}

impl From<&ValidationError> for UploadRejection {
    fn from(err: &ValidationError) -> Self {
        Self {
            filename: err.filename().to_string(),
            message: err.to_string(),
        }
    }
}

/// Result of adding one batch of candidates.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub accepted: Vec<UploadedFile>,
    pub rejected: Vec<UploadRejection>,
}

impl BatchOutcome {
    pub fn is_partial(&self) -> bool {
        !self.accepted.is_empty() && !self.rejected.is_empty()
    }
}

pub struct UploadSet {
    kind: UploadKind,
    validator: UploadValidator,
    evaluator: Arc<DocumentRiskEvaluator>,
    files: Vec<UploadedFile>,
}

impl UploadSet {
    pub fn new(
        kind: UploadKind,
        validator: UploadValidator,
        evaluator: Arc<DocumentRiskEvaluator>,
    ) -> Self {
        Self {
            kind,
            validator,
            evaluator,
            files: Vec::new(),
        }
    }

    pub fn kind(&self) -> UploadKind {
        self.kind
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Validate and evaluate a batch of candidates.
    pub fn add_batch<'a, I>(&mut self, candidates: I) -> BatchOutcome
    where
        I: IntoIterator<Item = &'a UploadCandidate>,
    {
        let mut outcome = BatchOutcome::default();

        for candidate in candidates {
            if let Err(err) = self.validator.validate(candidate) {
                tracing::warn!(
                    kind = %self.kind,
                    filename = %candidate.filename,
                    content_type = %candidate.content_type,
                    size_bytes = candidate.size_bytes,
                    error = %err,
                    "Upload rejected"
                );
                outcome.rejected.push(UploadRejection::from(&err));
                continue;
            }

            let file = UploadedFile::from(candidate);
            let flags = self.evaluator.evaluate(&file);
            let file = file.with_fraud_flags(flags);

            self.files.push(file.clone());
            outcome.accepted.push(file);
        }

        tracing::debug!(
            kind = %self.kind,
            accepted = outcome.accepted.len(),
            rejected = outcome.rejected.len(),
            total = self.files.len(),
            "Upload batch processed"
        );

        outcome
    }

    /// Remove a file and discard its flags. Returns the removed file.
    pub fn remove(&mut self, id: Uuid) -> Option<UploadedFile> {
        let index = self.files.iter().position(|file| file.id == id)?;
        Some(self.files.remove(index))
    }

    pub fn all_flags(&self) -> impl Iterator<Item = &DocumentFraudFlag> {
        self.files.iter().flat_map(|file| file.fraud_flags().iter())
    }

    pub fn risk_delta(&self) -> i64 {
        self.evaluator.risk_delta(self.all_flags())
    }

    /// Apply the batch's flags to the upstream risk score.
    pub fn finalize(&self, base: RiskScore) -> RiskScore {
        let delta = self.risk_delta();
        let score = base.adjusted(delta);

        tracing::info!(
            kind = %self.kind,
            files = self.files.len(),
            base = base.value(),
            delta,
            score = score.value(),
            "Upload step finalized"
        );

        score
    }
}
