use detachd_core::models::{media_type_essence, UploadCandidate, UploadKind};
use detachd_core::UploadConfig;
use std::path::Path;

/// Upload validation errors. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("File {filename} is too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge {
        filename: String,
        size: u64,
        max: u64,
    },

    #[error("File {filename} is not a supported file type: {content_type} (allowed: {allowed:?})")]
    UnsupportedContentType {
        filename: String,
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),
}

impl ValidationError {
    pub fn filename(&self) -> &str {
        match self {
            ValidationError::FileTooLarge { filename, .. }
            | ValidationError::UnsupportedContentType { filename, .. }
            | ValidationError::InvalidFilename(filename) => filename,
        }
    }
}

/// Upload validator for one upload input.
///
/// Checks the size limit and the content type. Allowed types may contain a
/// `type/*` wildcard, which matches every subtype.
#[derive(Debug, Clone)]
pub struct UploadValidator {
    max_file_size: u64,
    allowed_content_types: Vec<String>,
}

impl UploadValidator {
    pub fn new(max_file_size: u64, allowed_content_types: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_content_types: allowed_content_types
                .iter()
                .map(|ct| media_type_essence(ct))
                .collect(),
        }
    }

    pub fn for_kind(config: &UploadConfig, kind: UploadKind) -> Self {
        Self::new(
            config.max_upload_size_bytes,
            config.allowed_content_types(kind).to_vec(),
        )
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Validate file size
    pub fn validate_file_size(&self, filename: &str, size: u64) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                filename: filename.to_string(),
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate content type
    pub fn validate_content_type(
        &self,
        filename: &str,
        content_type: &str,
    ) -> Result<(), ValidationError> {
        let normalized = media_type_essence(content_type);

        if !self
            .allowed_content_types
            .iter()
            .any(|allowed| content_type_matches(allowed, &normalized))
        {
            return Err(ValidationError::UnsupportedContentType {
                filename: filename.to_string(),
                content_type: content_type.to_string(),
                allowed: self.allowed_content_types.clone(),
            });
        }

        Ok(())
    }

    /// Validate all aspects of a candidate file
    pub fn validate(&self, candidate: &UploadCandidate) -> Result<(), ValidationError> {
        if candidate.filename.trim().is_empty() {
            return Err(ValidationError::InvalidFilename(candidate.filename.clone()));
        }
        self.validate_file_size(&candidate.filename, candidate.size_bytes)?;
        self.validate_content_type(&candidate.filename, &candidate.content_type)?;
        Ok(())
    }
}

/// `allowed` is an exact media type or a `type/*` wildcard; `content_type` is normalized.
fn content_type_matches(allowed: &str, content_type: &str) -> bool {
    match allowed.strip_suffix("/*") {
        Some(top_level) => content_type
            .split_once('/')
            .map(|(top, sub)| top == top_level && !sub.is_empty())
            .unwrap_or(false),
        None => allowed == content_type,
    }
}

/// Best-effort media type for a filename, by extension.
///
/// Used where the client gives a path rather than a declared Content-Type.
/// Unknown extensions map to `application/octet-stream`.
pub fn content_type_for_filename(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        // Videos
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "m4v" => "video/x-m4v",
        // Documents
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "zip" => "application/zip",
        _ => {
            tracing::debug!(
                filename = %filename,
                extension = %extension,
                "Unknown extension, falling back to application/octet-stream"
            );
            "application/octet-stream"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_validator() -> UploadValidator {
        UploadValidator::for_kind(&UploadConfig::default(), UploadKind::Documents)
    }

    fn media_validator() -> UploadValidator {
        UploadValidator::for_kind(&UploadConfig::default(), UploadKind::Media)
    }

    #[test]
    fn test_validate_file_size_ok() {
        let validator = document_validator();
        assert!(validator.validate_file_size("a.pdf", 512 * 1024).is_ok());
        assert!(validator
            .validate_file_size("a.pdf", 10 * 1024 * 1024)
            .is_ok());
        // Empty files are accepted; the quality check flags them instead.
        assert!(validator.validate_file_size("a.pdf", 0).is_ok());
    }

    #[test]
    fn test_validate_file_size_too_large() {
        let validator = document_validator();
        let err = validator
            .validate_file_size("scan.pdf", 10 * 1024 * 1024 + 1)
            .unwrap_err();
        assert!(matches!(err, ValidationError::FileTooLarge { .. }));
        assert!(err.to_string().contains("scan.pdf"));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_validate_content_type_documents() {
        let validator = document_validator();
        assert!(validator.validate_content_type("a", "application/pdf").is_ok());
        assert!(validator.validate_content_type("a", "IMAGE/PNG").is_ok()); // case insensitive
        assert!(validator
            .validate_content_type("a", "image/jpeg; charset=binary")
            .is_ok());
        assert!(validator.validate_content_type("a", "video/mp4").is_err());
        assert!(validator.validate_content_type("a", "text/plain").is_err());
    }

    #[test]
    fn test_validate_content_type_media_wildcard() {
        let validator = media_validator();
        assert!(validator.validate_content_type("a", "video/mp4").is_ok());
        assert!(validator.validate_content_type("a", "video/quicktime").is_ok());
        assert!(validator.validate_content_type("a", "image/png").is_ok());
        assert!(validator.validate_content_type("a", "application/pdf").is_err());
        assert!(validator.validate_content_type("a", "video/").is_err());
        assert!(validator.validate_content_type("a", "videos/mp4").is_err());
    }

    #[test]
    fn test_validate_rejects_blank_filename() {
        let validator = document_validator();
        let candidate = UploadCandidate::new("  ", "application/pdf", 10);
        assert!(matches!(
            validator.validate(&candidate),
            Err(ValidationError::InvalidFilename(_))
        ));
    }

    #[test]
    fn test_validate_reports_size_before_type() {
        let validator = document_validator();
        let candidate = UploadCandidate::new("movie.mp4", "video/mp4", 20 * 1024 * 1024);
        let err = validator.validate(&candidate).unwrap_err();
        assert!(matches!(err, ValidationError::FileTooLarge { .. }));
        assert_eq!(err.filename(), "movie.mp4");
    }

    #[test]
    fn test_content_type_for_filename() {
        assert_eq!(content_type_for_filename("claim.PDF"), "application/pdf");
        assert_eq!(content_type_for_filename("photo.jpeg"), "image/jpeg");
        assert_eq!(content_type_for_filename("dashcam.mov"), "video/quicktime");
        assert_eq!(
            content_type_for_filename("noextension"),
            "application/octet-stream"
        );
    }
}
