use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;
use uuid::Uuid;

use super::fraud_flag::DocumentFraudFlag;

/// Which upload input a file arrived through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    /// Supporting documents: PDF and common image types.
    #[default]
    Documents,
    /// Photo/video evidence: image types plus any `video/*`.
    Media,
}

impl Display for UploadKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UploadKind::Documents => write!(f, "documents"),
            UploadKind::Media => write!(f, "media"),
        }
    }
}

/// File metadata as offered by the client, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadCandidate {
    pub filename: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl UploadCandidate {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            size_bytes,
        }
    }
}

/// A file accepted into a claim's upload set.
///
/// Fraud flags are attached once, when the file is accepted, and are read-only
/// afterwards. They live and die with the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadedFile {
    pub id: Uuid,
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
    fraud_flags: Vec<DocumentFraudFlag>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename: filename.into(),
            mime_type: mime_type.into(),
            size_bytes,
            uploaded_at: Utc::now(),
            fraud_flags: Vec::new(),
        }
    }

    /// Consume the file and return it with its fraud flags attached.
    pub fn with_fraud_flags(mut self, flags: Vec<DocumentFraudFlag>) -> Self {
        self.fraud_flags = flags;
        self
    }

    pub fn fraud_flags(&self) -> &[DocumentFraudFlag] {
        &self.fraud_flags
    }

    /// Normalized media type: lowercase, parameters (`; charset=...`) stripped.
    pub fn essence(&self) -> String {
        media_type_essence(&self.mime_type)
    }
}

impl From<&UploadCandidate> for UploadedFile {
    fn from(candidate: &UploadCandidate) -> Self {
        UploadedFile::new(
            candidate.filename.clone(),
            candidate.content_type.clone(),
            candidate.size_bytes,
        )
    }
}

/// Lowercase a media type and drop any parameters.
pub fn media_type_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}
