use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::CommentError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    Comment(CommentError),
}

impl From<CommentError> for ApiError {
    fn from(e: CommentError) -> Self {
        ApiError::Comment(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "not authorized".to_string()),
            ApiError::Comment(e) => match e {
                CommentError::NotFound => (StatusCode::NOT_FOUND, "comment not found".to_string()),
                CommentError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
                // Store / Processing / Fetch 细节只进日志，响应体保持笼统
                other => {
                    tracing::error!("Request failed: {:?}", other);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal server error".to_string(),
                    )
                }
            },
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::Comment(CommentError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let e = CommentError::Validation("not a valid comment".to_string());
        let response = ApiError::Comment(e).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn fetch_maps_to_500_with_generic_body() {
        let response = ApiError::Comment(CommentError::Fetch).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "internal server error");
    }

    #[test]
    fn store_and_processing_map_to_500() {
        let store = CommentError::Store(anyhow::anyhow!("connection reset"));
        let response = ApiError::Comment(store).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let processing = CommentError::Processing(anyhow::anyhow!("interpreter unavailable"));
        let response = ApiError::Comment(processing).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
