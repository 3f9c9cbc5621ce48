use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

use crate::constants::DEFAULT_BASE_RISK_SCORE;

/// Integer proxy for claim fraud likelihood.
///
/// Nominally 0-100 but never clamped: a batch full of high-severity flags can
/// push it past 100.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct RiskScore(pub i64);

impl RiskScore {
    pub fn new(value: i64) -> Self {
        RiskScore(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Return the score raised by `delta`.
    pub fn adjusted(self, delta: i64) -> Self {
        RiskScore(self.0.saturating_add(delta))
    }
}

impl Default for RiskScore {
    fn default() -> Self {
        RiskScore(DEFAULT_BASE_RISK_SCORE)
    }
}

impl Display for RiskScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_score() {
        assert_eq!(RiskScore::default().value(), 25);
    }

    #[test]
    fn test_adjusted_is_not_clamped() {
        assert_eq!(RiskScore::new(95).adjusted(30).value(), 125);
        assert_eq!(RiskScore::new(i64::MAX).adjusted(1).value(), i64::MAX);
    }
}
