//! Signal providers for the probabilistic fraud checks.
//!
//! A provider returns a score in `[0, 1]` for one check on one file. The
//! evaluator raises the flag when that score exceeds the configured threshold.
//! Random providers stand in for a fraud-detection model until one is wired
//! up; a real classifier only has to implement [`FraudSignalProvider`].

use detachd_core::models::UploadedFile;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;
use std::sync::Mutex;

/// Probabilistic checks that consult a [`FraudSignalProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FraudCheck {
    Handwriting,
    DateAlteration,
    MetadataConsistency,
}

/// Source of per-check suspicion scores.
pub trait FraudSignalProvider: Send + Sync + Debug {
    /// Get the provider name/identifier
    fn name(&self) -> &str;

    /// Suspicion score in `[0, 1]` for `check` on `file`.
    fn score(&self, check: FraudCheck, file: &UploadedFile) -> f64;
}

/// Uniform draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSignals;

impl FraudSignalProvider for RandomSignals {
    fn name(&self) -> &str {
        "random"
    }

    fn score(&self, _check: FraudCheck, _file: &UploadedFile) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Uniform draws from a seeded generator, for reproducible runs.
#[derive(Debug)]
pub struct SeededSignals {
    rng: Mutex<StdRng>,
}

impl SeededSignals {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl FraudSignalProvider for SeededSignals {
    fn name(&self) -> &str {
        "seeded"
    }

    fn score(&self, _check: FraudCheck, _file: &UploadedFile) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random::<f64>()
    }
}

/// Returns the same score for every check.
///
/// `FixedSignals::always()` scores 1.0 and `FixedSignals::never()` scores 0.0.
/// Checks compare with a strict `>`, so `always()` trips every check whose
/// threshold is below 1.0. A threshold of 1.0 disables its check for every
/// provider, `always()` included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSignals(pub f64);

impl FixedSignals {
    pub fn always() -> Self {
        FixedSignals(1.0)
    }

    pub fn never() -> Self {
        FixedSignals(0.0)
    }
}

impl FraudSignalProvider for FixedSignals {
    fn name(&self) -> &str {
        "fixed"
    }

    fn score(&self, _check: FraudCheck, _file: &UploadedFile) -> f64 {
        self.0
    }
}

/// Pick the provider for a configured seed.
pub fn provider_for_seed(seed: Option<u64>) -> Box<dyn FraudSignalProvider> {
    match seed {
        Some(seed) => Box::new(SeededSignals::new(seed)),
        None => Box::new(RandomSignals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> UploadedFile {
        UploadedFile::new("a.pdf", "application/pdf", 100)
    }

    #[test]
    fn test_random_scores_in_unit_interval() {
        let provider = RandomSignals;
        for _ in 0..1000 {
            let score = provider.score(FraudCheck::Handwriting, &file());
            assert!((0.0..1.0).contains(&score));
        }
    }

    #[test]
    fn test_seeded_provider_is_reproducible() {
        let a = SeededSignals::new(42);
        let b = SeededSignals::new(42);
        let file = file();
        let first: Vec<f64> = (0..20)
            .map(|_| a.score(FraudCheck::DateAlteration, &file))
            .collect();
        let second: Vec<f64> = (0..20)
            .map(|_| b.score(FraudCheck::DateAlteration, &file))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_provider() {
        assert_eq!(
            FixedSignals::always().score(FraudCheck::MetadataConsistency, &file()),
            1.0
        );
        assert_eq!(
            FixedSignals::never().score(FraudCheck::MetadataConsistency, &file()),
            0.0
        );
    }

    #[test]
    fn test_provider_for_seed() {
        assert_eq!(provider_for_seed(Some(7)).name(), "seeded");
        assert_eq!(provider_for_seed(None).name(), "random");
    }
}
