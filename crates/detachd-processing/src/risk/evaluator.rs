use detachd_core::constants::PDF_CONTENT_TYPE;
use detachd_core::models::{DocumentFraudFlag, UploadedFile};
use detachd_core::RiskConfig;
use std::sync::Arc;

use super::signals::{provider_for_seed, FraudCheck, FraudSignalProvider};

/// Whether a media type is subject to fraud checks (PDF or any image).
pub fn is_evaluated_type(essence: &str) -> bool {
    essence == PDF_CONTENT_TYPE || essence.starts_with("image/")
}

/// Runs the document fraud checks against uploaded files.
///
/// Checks run in a fixed order (handwriting, date alteration, quality,
/// metadata) and each is independent of the others. Only the quality check is
/// deterministic; the rest consult the injected signal provider.
#[derive(Debug, Clone)]
pub struct DocumentRiskEvaluator {
    provider: Arc<dyn FraudSignalProvider>,
    config: RiskConfig,
}

impl DocumentRiskEvaluator {
    pub fn new(provider: Arc<dyn FraudSignalProvider>, config: RiskConfig) -> Self {
        Self { provider, config }
    }

    /// Evaluator backed by the provider implied by `config.random_seed`.
    pub fn from_config(config: RiskConfig) -> Self {
        let provider: Arc<dyn FraudSignalProvider> = Arc::from(provider_for_seed(config.random_seed));
        Self::new(provider, config)
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    fn trips(&self, check: FraudCheck, file: &UploadedFile, threshold: f64) -> bool {
        self.provider.score(check, file) > threshold
    }

    /// Produce the fraud flags for one file. Types other than PDF and images
    /// yield no flags.
    pub fn evaluate(&self, file: &UploadedFile) -> Vec<DocumentFraudFlag> {
        let essence = file.essence();
        if !is_evaluated_type(&essence) {
            tracing::debug!(
                filename = %file.filename,
                mime_type = %essence,
                "Skipping fraud checks for non-document type"
            );
            return Vec::new();
        }

        let mut flags = Vec::with_capacity(4);

        if self.trips(FraudCheck::Handwriting, file, self.config.handwriting_threshold) {
            flags.push(DocumentFraudFlag::handwriting_suspicious());
        }

        if self.trips(
            FraudCheck::DateAlteration,
            file,
            self.config.date_altered_threshold,
        ) {
            flags.push(DocumentFraudFlag::date_altered());
        }

        if file.size_bytes < self.config.low_quality_threshold_bytes {
            flags.push(DocumentFraudFlag::document_quality());
        }

        if self.trips(
            FraudCheck::MetadataConsistency,
            file,
            self.config.metadata_threshold,
        ) {
            flags.push(DocumentFraudFlag::metadata_inconsistent());
        }

        tracing::debug!(
            filename = %file.filename,
            mime_type = %essence,
            size_bytes = file.size_bytes,
            provider = self.provider.name(),
            flag_count = flags.len(),
            "Evaluated document fraud checks"
        );

        flags
    }

    /// Risk-score delta for a set of flags, using the configured penalty.
    pub fn risk_delta<'a, I>(&self, flags: I) -> i64
    where
        I: IntoIterator<Item = &'a DocumentFraudFlag>,
    {
        aggregate_risk_delta_with_penalty(flags, self.config.high_severity_penalty)
    }
}

/// `penalty * count(high-severity flags)`.
pub fn aggregate_risk_delta_with_penalty<'a, I>(flags: I, penalty: i64) -> i64
where
    I: IntoIterator<Item = &'a DocumentFraudFlag>,
{
    let high = flags.into_iter().filter(|flag| flag.is_high()).count() as i64;
    high.saturating_mul(penalty)
}

/// `15 * count(high-severity flags)`.
pub fn aggregate_risk_delta<'a, I>(flags: I) -> i64
where
    I: IntoIterator<Item = &'a DocumentFraudFlag>,
{
    aggregate_risk_delta_with_penalty(flags, detachd_core::constants::DEFAULT_HIGH_SEVERITY_PENALTY)
}
