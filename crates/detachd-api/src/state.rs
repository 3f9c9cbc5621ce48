//! Application state shared by all handlers.

use detachd_core::models::UploadKind;
use detachd_core::{AccessGate, Config, NavigationTable};
use detachd_processing::{DocumentRiskEvaluator, UploadSet, UploadValidator};
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub evaluator: Arc<DocumentRiskEvaluator>,
    pub gate: AccessGate,
    pub navigation: NavigationTable,
}

impl AppState {
    pub fn new(config: Config, evaluator: DocumentRiskEvaluator) -> Self {
        let gate = AccessGate::new(config.access.gate_paths());
        Self {
            config,
            evaluator: Arc::new(evaluator),
            gate,
            navigation: NavigationTable::default(),
        }
    }

    /// State with the signal provider chosen by the risk configuration.
    pub fn from_config(config: Config) -> Self {
        let evaluator = DocumentRiskEvaluator::from_config(config.risk.clone());
        Self::new(config, evaluator)
    }

    pub fn validator(&self, kind: UploadKind) -> UploadValidator {
        UploadValidator::for_kind(&self.config.upload, kind)
    }

    /// Fresh upload set for one request.
    pub fn upload_set(&self, kind: UploadKind) -> UploadSet {
        UploadSet::new(kind, self.validator(kind), self.evaluator.clone())
    }
}
