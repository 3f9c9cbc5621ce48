//! OpenAPI documentation, served at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use detachd_core::models;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Detachd Claims Rules API",
        version = "0.1.0",
        description = "Document fraud-risk flagging and role-based access decisions for the Detachd claims platform. All endpoints are versioned under /api/v0/."
    ),
    paths(
        handlers::documents::assess_documents,
        handlers::documents::evaluate_document,
        handlers::access::decide_access,
        handlers::access::get_navigation,
    ),
    components(
        schemas(
            // Documents
            handlers::documents::FileMetadataRequest,
            handlers::documents::AssessDocumentsRequest,
            handlers::documents::AssessDocumentsResponse,
            handlers::documents::RejectedFileResponse,
            handlers::documents::EvaluateDocumentRequest,
            handlers::documents::EvaluateDocumentResponse,
            models::UploadKind,
            models::UploadedFile,
            models::DocumentFraudFlag,
            models::FlagType,
            models::Severity,
            models::RiskScore,
            // Access
            handlers::access::AccessDecisionRequest,
            handlers::access::NavigationResponse,
            detachd_core::Session,
            detachd_core::RoutePolicy,
            detachd_core::AccessDecision,
            detachd_core::DenialScreen,
            detachd_core::NavItem,
            // Error
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "documents", description = "Upload validation and document fraud-risk flagging"),
        (name = "access", description = "Role-based route gating and navigation")
    )
)]
pub struct ApiDoc;
