//! Offline runs of the claims rules: assess files on disk, ask the access
//! gate for a decision, print a role's navigation.

use anyhow::Context;
use detachd_core::models::{
    DocumentFraudFlag, RiskScore, UploadCandidate, UploadKind, UploadedFile, UserRole,
};
use detachd_core::{AccessDecision, AccessGate, Config, NavItem, NavigationTable, RoutePolicy, Session};
use detachd_processing::{
    content_type_for_filename, DocumentRiskEvaluator, UploadRejection, UploadSet, UploadValidator,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Result of assessing a set of files on disk.
#[derive(Debug, Serialize)]
pub struct AssessmentReport {
    pub kind: UploadKind,
    pub accepted: Vec<UploadedFile>,
    pub rejected: Vec<UploadRejection>,
    pub risk_delta: i64,
    pub risk_score: RiskScore,
}

impl AssessmentReport {
    pub fn flags(&self) -> impl Iterator<Item = &DocumentFraudFlag> {
        self.accepted.iter().flat_map(|file| file.fraud_flags())
    }
}

/// Candidate metadata for a file on disk. The MIME type comes from the extension.
pub fn candidate_from_path(path: &Path) -> anyhow::Result<UploadCandidate> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;
    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = content_type_for_filename(&filename);

    Ok(UploadCandidate::new(filename, content_type, metadata.len()))
}

/// Validate and evaluate `paths` as one batch against `base_score`.
///
/// A seed makes the fraud checks reproducible; otherwise the configured
/// signal source is used.
pub fn assess_paths(
    config: &Config,
    kind: UploadKind,
    paths: &[PathBuf],
    base_score: Option<i64>,
    seed: Option<u64>,
) -> anyhow::Result<AssessmentReport> {
    let candidates = paths
        .iter()
        .map(|path| candidate_from_path(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut risk = config.risk.clone();
    if seed.is_some() {
        risk.random_seed = seed;
    }
    let evaluator = Arc::new(DocumentRiskEvaluator::from_config(risk));

    tracing::debug!(
        kind = %kind,
        files = candidates.len(),
        provider = evaluator.provider_name(),
        "Assessing files"
    );

    let validator = UploadValidator::for_kind(&config.upload, kind);
    let mut uploads = UploadSet::new(kind, validator, evaluator);
    let outcome = uploads.add_batch(&candidates);
    let risk_score =
        uploads.finalize(RiskScore::new(base_score.unwrap_or(config.risk.base_score)));

    Ok(AssessmentReport {
        kind,
        accepted: outcome.accepted,
        rejected: outcome.rejected,
        risk_delta: uploads.risk_delta(),
        risk_score,
    })
}

/// Options for a single gate decision.
#[derive(Debug, Clone)]
pub struct AccessQuery {
    pub role: Option<String>,
    pub authenticated: bool,
    pub allowed_roles: Vec<String>,
    pub redirect_to: Option<String>,
    pub show_access_denied: bool,
}

pub fn decide(config: &Config, query: &AccessQuery) -> AccessDecision {
    let session = match (&query.role, query.authenticated) {
        (Some(role), true) => Session::authenticated(role.as_str()),
        _ => Session::anonymous(),
    };

    let mut policy = RoutePolicy::new(query.allowed_roles.iter().map(String::as_str))
        .show_access_denied(query.show_access_denied);
    if let Some(path) = &query.redirect_to {
        policy = policy.redirect_to(path.clone());
    }

    AccessGate::new(config.access.gate_paths()).decide(&session, &policy)
}

pub fn navigation_for(role: &str) -> Vec<NavItem> {
    NavigationTable::default()
        .items_for(&UserRole::from(role))
        .to_vec()
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
