//! Default values for upload limits, risk scoring and access paths.
//!
//! The risk numbers are demo defaults pending product confirmation; every one of
//! them can be overridden through [`crate::config`].

/// 10 MB
pub const DEFAULT_MAX_UPLOAD_SIZE_BYTES: u64 = 10 * 1024 * 1024;

pub const DEFAULT_BASE_RISK_SCORE: i64 = 25;
pub const DEFAULT_HIGH_SEVERITY_PENALTY: i64 = 15;
pub const DEFAULT_LOW_QUALITY_THRESHOLD_BYTES: u64 = 50_000;

pub const DEFAULT_HANDWRITING_THRESHOLD: f64 = 0.7;
pub const DEFAULT_DATE_ALTERED_THRESHOLD: f64 = 0.8;
pub const DEFAULT_METADATA_THRESHOLD: f64 = 0.75;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

pub const IMAGE_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/heic",
];

/// Matches any video subtype.
pub const VIDEO_WILDCARD: &str = "video/*";

pub fn default_document_content_types() -> Vec<String> {
    std::iter::once(PDF_CONTENT_TYPE)
        .chain(IMAGE_CONTENT_TYPES.iter().copied())
        .map(String::from)
        .collect()
}

pub fn default_media_content_types() -> Vec<String> {
    IMAGE_CONTENT_TYPES
        .iter()
        .copied()
        .chain(std::iter::once(VIDEO_WILDCARD))
        .map(String::from)
        .collect()
}
