use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use detachd_core::models::{DocumentFraudFlag, RiskScore, UploadCandidate, UploadKind, UploadedFile};
use detachd_processing::UploadRejection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct FileMetadataRequest {
    #[validate(length(min = 1, max = 255))]
    pub filename: String,
    #[validate(length(min = 1, max = 255))]
    pub content_type: String,
    pub size_bytes: u64,
}

impl From<&FileMetadataRequest> for UploadCandidate {
    fn from(req: &FileMetadataRequest) -> Self {
        UploadCandidate::new(req.filename.clone(), req.content_type.clone(), req.size_bytes)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AssessDocumentsRequest {
    #[serde(default)]
    pub kind: UploadKind,
    /// Upstream risk score the batch adjusts. Defaults to the configured base score.
    #[serde(default)]
    pub base_risk_score: Option<i64>,
    /// At most 50 files per request.
    #[validate(length(min = 1, max = 50), nested)]
    pub files: Vec<FileMetadataRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RejectedFileResponse {
    pub filename: String,
    pub message: String,
}

impl From<UploadRejection> for RejectedFileResponse {
    fn from(rejection: UploadRejection) -> Self {
        Self {
            filename: rejection.filename,
            message: rejection.message,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AssessDocumentsResponse {
    pub kind: UploadKind,
    pub accepted: Vec<UploadedFile>,
    pub rejected: Vec<RejectedFileResponse>,
    pub risk_delta: i64,
    pub risk_score: RiskScore,
}

#[utoipa::path(
    post,
    path = "/api/v0/documents/assess",
    tag = "documents",
    request_body = AssessDocumentsRequest,
    responses(
        (status = 200, description = "Batch assessed; invalid files are listed under `rejected`", body = AssessDocumentsResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse)
    )
)]
pub async fn assess_documents(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<AssessDocumentsRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate()?;

    let candidates: Vec<UploadCandidate> = request.files.iter().map(UploadCandidate::from).collect();
    let base = RiskScore::new(
        request
            .base_risk_score
            .unwrap_or(state.config.risk.base_score),
    );

    let mut uploads = state.upload_set(request.kind);
    let outcome = uploads.add_batch(&candidates);
    let risk_score = uploads.finalize(base);

    Ok(Json(AssessDocumentsResponse {
        kind: request.kind,
        accepted: outcome.accepted,
        rejected: outcome
            .rejected
            .into_iter()
            .map(RejectedFileResponse::from)
            .collect(),
        risk_delta: uploads.risk_delta(),
        risk_score,
    }))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EvaluateDocumentRequest {
    #[serde(default)]
    pub kind: UploadKind,
    #[validate(nested)]
    pub file: FileMetadataRequest,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EvaluateDocumentResponse {
    pub fraud_flags: Vec<DocumentFraudFlag>,
    pub risk_delta: i64,
}

#[utoipa::path(
    post,
    path = "/api/v0/documents/evaluate",
    tag = "documents",
    request_body = EvaluateDocumentRequest,
    responses(
        (status = 200, description = "Fraud flags for one file", body = EvaluateDocumentResponse),
        (status = 413, description = "File exceeds the size limit", body = ErrorResponse),
        (status = 415, description = "Unsupported file type", body = ErrorResponse)
    )
)]
pub async fn evaluate_document(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<EvaluateDocumentRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate()?;

    let candidate = UploadCandidate::from(&request.file);
    state.validator(request.kind).validate(&candidate)?;

    let file = UploadedFile::from(&candidate);
    let fraud_flags = state.evaluator.evaluate(&file);
    let risk_delta = state.evaluator.risk_delta(&fraud_flags);

    Ok(Json(EvaluateDocumentResponse {
        fraud_flags,
        risk_delta,
    }))
}
