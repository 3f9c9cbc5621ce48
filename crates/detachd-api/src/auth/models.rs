use crate::error::HttpAppError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use detachd_core::models::UserRole;
use detachd_core::{AppError, Session};

/// Header carrying the role of the signed-in user, set by the auth proxy.
pub const ROLE_HEADER: &str = "x-detachd-role";

/// Authenticated session extracted from request headers.
///
/// A request without a (non-empty) role header is rejected with 401 before
/// the handler runs.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub role: UserRole,
}

impl SessionContext {
    pub fn session(&self) -> Session {
        Session::authenticated(self.role.clone())
    }
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(UserRole::from)
            .filter(|role| !role.is_blank())
            .map(|role| SessionContext { role })
            .ok_or_else(|| {
                HttpAppError(AppError::Unauthorized(
                    "Missing session context".to_string(),
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;

    async fn extract(request: Request<()>) -> Result<SessionContext, StatusCode> {
        let (mut parts, _) = request.into_parts();
        SessionContext::from_request_parts(&mut parts, &())
            .await
            .map_err(|rejection| rejection.into_response().status())
    }

    #[tokio::test]
    async fn test_role_header_is_extracted() {
        let request = Request::builder()
            .header(ROLE_HEADER, " insurer_agent ")
            .body(())
            .unwrap();
        let ctx = extract(request).await.unwrap();
        assert_eq!(ctx.role, UserRole::InsurerAgent);
        assert!(ctx.session().is_authenticated);
    }

    #[tokio::test]
    async fn test_missing_or_blank_header_is_unauthorized() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(extract(request).await.unwrap_err(), StatusCode::UNAUTHORIZED);

        let request = Request::builder()
            .header(ROLE_HEADER, "   ")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await.unwrap_err(), StatusCode::UNAUTHORIZED);
    }
}
