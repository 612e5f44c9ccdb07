use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// Artifact identifier taken from the `:id` path segment.
///
/// Every id-taking route goes through this extractor, so a malformed id is
/// rejected the same way everywhere, before the handler touches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactId(pub ObjectId);

#[async_trait]
impl<S> FromRequestParts<S> for ArtifactId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidIdentifier(rejection.body_text()))?;

        let id = ObjectId::parse_str(&raw).map_err(|e| {
            tracing::warn!(id = %raw, "Rejected malformed artifact id: {}", e);
            AppError::from(e)
        })?;

        Ok(ArtifactId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(
            "/items/:id",
            get(|ArtifactId(id): ArtifactId| async move { id.to_hex() }),
        )
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_object_id_is_extracted() {
        let (status, body) = call("/items/65a1b2c3d4e5f60718293a4b").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "65a1b2c3d4e5f60718293a4b");
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected_with_invalid_id_body() {
        let (status, body) = call("/items/not-an-id").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"Invalid ID format!"}"#);
    }

    #[tokio::test]
    async fn test_wrong_length_hex_is_rejected() {
        let (status, _) = call("/items/65a1b2c3").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
