//! Document fraud-risk flagging and risk-score aggregation.

mod evaluator;
mod signals;

pub use evaluator::{
    aggregate_risk_delta, aggregate_risk_delta_with_penalty, is_evaluated_type,
    DocumentRiskEvaluator,
};
pub use signals::{
    provider_for_seed, FixedSignals, FraudCheck, FraudSignalProvider, RandomSignals,
    SeededSignals,
};
