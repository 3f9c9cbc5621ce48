//! Configuration module
//!
//! Configuration is read from the environment (a `.env` file is honoured by the
//! binaries through `dotenvy`). Every value has a default, and [`Config::validate`]
//! rejects combinations the scoring and access code cannot work with.

use std::env;
use std::str::FromStr;

use crate::access::GatePaths;
use crate::constants::{
    default_document_content_types, default_media_content_types, DEFAULT_BASE_RISK_SCORE,
    DEFAULT_DASHBOARD_PATH, DEFAULT_DATE_ALTERED_THRESHOLD, DEFAULT_HANDWRITING_THRESHOLD,
    DEFAULT_HIGH_SEVERITY_PENALTY, DEFAULT_LOGIN_PATH, DEFAULT_LOW_QUALITY_THRESHOLD_BYTES,
    DEFAULT_MAX_UPLOAD_SIZE_BYTES, DEFAULT_METADATA_THRESHOLD,
};
use crate::models::UploadKind;

const SERVER_PORT: u16 = 3000;
const MAX_CONCURRENT_REQUESTS: usize = 256;

/// Server settings shared by every binary
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub max_concurrent_requests: usize,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            server_port: SERVER_PORT,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            max_concurrent_requests: MAX_CONCURRENT_REQUESTS,
        }
    }
}

/// Upload acceptance rules
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub max_upload_size_bytes: u64,
    pub document_allowed_content_types: Vec<String>,
    /// Entries may use a `type/*` wildcard.
    pub media_allowed_content_types: Vec<String>,
}

impl UploadConfig {
    pub fn allowed_content_types(&self, kind: UploadKind) -> &[String] {
        match kind {
            UploadKind::Documents => &self.document_allowed_content_types,
            UploadKind::Media => &self.media_allowed_content_types,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_size_bytes: DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            document_allowed_content_types: default_document_content_types(),
            media_allowed_content_types: default_media_content_types(),
        }
    }
}

/// Document risk scoring parameters.
///
/// The thresholds are compared against a signal score in `[0, 1]`; a check
/// raises its flag when the score is strictly greater than the threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct RiskConfig {
    pub base_score: i64,
    pub high_severity_penalty: i64,
    pub low_quality_threshold_bytes: u64,
    pub handwriting_threshold: f64,
    pub date_altered_threshold: f64,
    pub metadata_threshold: f64,
    /// Seed for reproducible signal draws. `None` uses the thread RNG.
    pub random_seed: Option<u64>,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            base_score: DEFAULT_BASE_RISK_SCORE,
            high_severity_penalty: DEFAULT_HIGH_SEVERITY_PENALTY,
            low_quality_threshold_bytes: DEFAULT_LOW_QUALITY_THRESHOLD_BYTES,
            handwriting_threshold: DEFAULT_HANDWRITING_THRESHOLD,
            date_altered_threshold: DEFAULT_DATE_ALTERED_THRESHOLD,
            metadata_threshold: DEFAULT_METADATA_THRESHOLD,
            random_seed: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AccessConfig {
    pub login_path: String,
    pub dashboard_path: String,
}

impl AccessConfig {
    pub fn gate_paths(&self) -> GatePaths {
        GatePaths {
            login: self.login_path.clone(),
            dashboard: self.dashboard_path.clone(),
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_string(),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub base: BaseConfig,
    pub upload: UploadConfig,
    pub risk: RiskConfig,
    pub access: AccessConfig,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

/// Split a comma-separated list, trimming and lowercasing entries.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

fn env_list_or(key: &str, default: Vec<String>) -> Vec<String> {
    env::var(key)
        .ok()
        .map(|raw| parse_list(&raw))
        .filter(|list| !list.is_empty())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let base = BaseConfig {
            server_port: env_or("SERVER_PORT", SERVER_PORT),
            environment: env::var("ENVIRONMENT")
                .or_else(|_| env::var("APP_ENV"))
                .unwrap_or_else(|_| "development".to_string()),
            cors_origins: env_list_or("CORS_ORIGINS", vec!["*".to_string()]),
            max_concurrent_requests: env_or("MAX_CONCURRENT_REQUESTS", MAX_CONCURRENT_REQUESTS),
        };

        let upload = UploadConfig {
            max_upload_size_bytes: env_or("MAX_UPLOAD_SIZE_BYTES", DEFAULT_MAX_UPLOAD_SIZE_BYTES),
            document_allowed_content_types: env_list_or(
                "DOCUMENT_ALLOWED_CONTENT_TYPES",
                default_document_content_types(),
            ),
            media_allowed_content_types: env_list_or(
                "MEDIA_ALLOWED_CONTENT_TYPES",
                default_media_content_types(),
            ),
        };

        let risk = RiskConfig {
            base_score: env_or("RISK_BASE_SCORE", DEFAULT_BASE_RISK_SCORE),
            high_severity_penalty: env_or(
                "RISK_HIGH_SEVERITY_PENALTY",
                DEFAULT_HIGH_SEVERITY_PENALTY,
            ),
            low_quality_threshold_bytes: env_or(
                "RISK_LOW_QUALITY_THRESHOLD_BYTES",
                DEFAULT_LOW_QUALITY_THRESHOLD_BYTES,
            ),
            handwriting_threshold: env_or(
                "RISK_HANDWRITING_THRESHOLD",
                DEFAULT_HANDWRITING_THRESHOLD,
            ),
            date_altered_threshold: env_or(
                "RISK_DATE_ALTERED_THRESHOLD",
                DEFAULT_DATE_ALTERED_THRESHOLD,
            ),
            metadata_threshold: env_or("RISK_METADATA_THRESHOLD", DEFAULT_METADATA_THRESHOLD),
            random_seed: env::var("RISK_RANDOM_SEED")
                .ok()
                .and_then(|s| s.trim().parse().ok()),
        };

        let access = AccessConfig {
            login_path: env::var("LOGIN_PATH").unwrap_or_else(|_| DEFAULT_LOGIN_PATH.to_string()),
            dashboard_path: env::var("DASHBOARD_PATH")
                .unwrap_or_else(|_| DEFAULT_DASHBOARD_PATH.to_string()),
        };

        let config = Config {
            base,
            upload,
            risk,
            access,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.upload.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_BYTES must be greater than 0"));
        }

        if self.upload.document_allowed_content_types.is_empty()
            || self.upload.media_allowed_content_types.is_empty()
        {
            return Err(anyhow::anyhow!(
                "DOCUMENT_ALLOWED_CONTENT_TYPES and MEDIA_ALLOWED_CONTENT_TYPES must not be empty"
            ));
        }

        if self.risk.high_severity_penalty < 0 {
            return Err(anyhow::anyhow!(
                "RISK_HIGH_SEVERITY_PENALTY must not be negative"
            ));
        }

        for (name, value) in [
            ("RISK_HANDWRITING_THRESHOLD", self.risk.handwriting_threshold),
            ("RISK_DATE_ALTERED_THRESHOLD", self.risk.date_altered_threshold),
            ("RISK_METADATA_THRESHOLD", self.risk.metadata_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(anyhow::anyhow!(
                    "{} must be between 0 and 1 (got {})",
                    name,
                    value
                ));
            }
        }

        for (name, path) in [
            ("LOGIN_PATH", &self.access.login_path),
            ("DASHBOARD_PATH", &self.access.dashboard_path),
        ] {
            if !path.starts_with('/') {
                return Err(anyhow::anyhow!("{} must start with '/' (got {})", name, path));
            }
        }

        Ok(())
    }
}
