use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// Kind of fraud signal raised against an uploaded document.
///
/// This set is closed; downstream consumers match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FlagType {
    HandwritingSuspicious,
    DateAltered,
    DocumentQuality,
    MetadataInconsistent,
}

impl FlagType {
    pub const ALL: [FlagType; 4] = [
        FlagType::HandwritingSuspicious,
        FlagType::DateAltered,
        FlagType::DocumentQuality,
        FlagType::MetadataInconsistent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlagType::HandwritingSuspicious => "handwriting_suspicious",
            FlagType::DateAltered => "date_altered",
            FlagType::DocumentQuality => "document_quality",
            FlagType::MetadataInconsistent => "metadata_inconsistent",
        }
    }
}

impl Display for FlagType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Flag severity. Variant order defines the total order `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A qualitative warning attached to an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DocumentFraudFlag {
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    pub severity: Severity,
    pub message: String,
}

impl DocumentFraudFlag {
    pub fn new(flag_type: FlagType, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            flag_type,
            severity,
            message: message.into(),
        }
    }

    pub fn handwriting_suspicious() -> Self {
        Self::new(
            FlagType::HandwritingSuspicious,
            Severity::Medium,
            "Handwriting patterns appear inconsistent with other submitted documents",
        )
    }

    pub fn date_altered() -> Self {
        Self::new(
            FlagType::DateAltered,
            Severity::High,
            "Date fields show signs of digital alteration",
        )
    }

    pub fn document_quality() -> Self {
        Self::new(
            FlagType::DocumentQuality,
            Severity::Low,
            "Low resolution document may affect verification accuracy",
        )
    }

    pub fn metadata_inconsistent() -> Self {
        Self::new(
            FlagType::MetadataInconsistent,
            Severity::Medium,
            "File metadata does not match the expected creation timeline",
        )
    }

    pub fn is_high(&self) -> bool {
        self.severity == Severity::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert_eq!(
            [Severity::High, Severity::Low, Severity::Medium]
                .into_iter()
                .max(),
            Some(Severity::High)
        );
    }

    #[test]
    fn test_flag_serializes_with_type_key() {
        let value = serde_json::to_value(DocumentFraudFlag::date_altered()).unwrap();
        assert_eq!(value["type"], "date_altered");
        assert_eq!(value["severity"], "high");
        assert!(value["message"].as_str().unwrap().contains("alteration"));
    }

    #[test]
    fn test_builtin_flags_use_expected_severity() {
        assert_eq!(
            DocumentFraudFlag::handwriting_suspicious().severity,
            Severity::Medium
        );
        assert_eq!(DocumentFraudFlag::date_altered().severity, Severity::High);
        assert_eq!(DocumentFraudFlag::document_quality().severity, Severity::Low);
        assert_eq!(
            DocumentFraudFlag::metadata_inconsistent().severity,
            Severity::Medium
        );
    }

    #[test]
    fn test_unknown_flag_type_is_rejected() {
        let result: Result<DocumentFraudFlag, _> = serde_json::from_str(
            r#"{"type":"signature_forged","severity":"high","message":"x"}"#,
        );
        assert!(result.is_err());
    }
}
