use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use domain::Comment;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PostCommentRequest {
    pub slug: String,
    pub author: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct UpdateCommentRequest {
    pub slug: String,
    pub author: String,
    pub body: String,
}

pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Comment>, ApiError> {
    let comment = state.service.get_comment(&id).await?;
    Ok(Json(comment))
}

pub async fn post_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PostCommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    if !state.auth.authorize(&headers) {
        return Err(ApiError::Unauthorized);
    }

    let comment = Comment::new(payload.slug, payload.author, payload.body);
    comment.validate()?;

    let inserted = state.service.post_comment(&comment).await?;
    Ok(Json(inserted))
}

pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    if !state.auth.authorize(&headers) {
        return Err(ApiError::Unauthorized);
    }

    let comment = Comment::new(payload.slug, payload.author, payload.body);
    let updated = state.service.update_comment(&id, &comment).await?;
    Ok(Json(updated))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !state.auth.authorize(&headers) {
        return Err(ApiError::Unauthorized);
    }

    state.service.delete_comment(&id).await?;
    Ok(Json(json!({ "message": "Successfully deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenGuard;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use domain::CommentError;
    use hmac::{Hmac, Mac};
    use service::{CommentService, IdentityProcessor};
    use sha2::Sha256;
    use std::sync::Arc;

    const SECRET: &str = "mission impossible";

    async fn test_state() -> AppState {
        let db = storage::Db::new("sqlite::memory:").await.unwrap();
        AppState {
            service: CommentService::new(Arc::new(db), Arc::new(IdentityProcessor)),
            auth: TokenGuard::new(SECRET.to_string()),
        }
    }

    fn bearer_headers() -> HeaderMap {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let claims = URL_SAFE_NO_PAD.encode(r#"{"sub":"client"}"#);
        let mut mac = Hmac::<Sha256>::new_from_slice(SECRET.as_bytes()).unwrap();
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(claims.as_bytes());
        let sig = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        let mut headers = HeaderMap::new();
        let value = format!("Bearer {}.{}.{}", header, claims, sig);
        headers.insert("Authorization", value.parse().unwrap());
        headers
    }

    fn payload() -> PostCommentRequest {
        PostCommentRequest {
            slug: "s1".to_string(),
            author: "Imraan".to_string(),
            body: "Hello world".to_string(),
        }
    }

    #[tokio::test]
    async fn mutating_handlers_reject_missing_bearer() {
        let state = test_state().await;
        let headers = HeaderMap::new();

        let result = post_comment(State(state.clone()), headers.clone(), Json(payload())).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));

        let update = UpdateCommentRequest {
            slug: "s2".to_string(),
            author: "Someone".to_string(),
            body: "Edited".to_string(),
        };
        let result = update_comment(
            State(state.clone()),
            headers.clone(),
            Path("some-id".to_string()),
            Json(update),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));

        let result = delete_comment(State(state), headers, Path("some-id".to_string())).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn valid_bearer_passes_the_gate() {
        let state = test_state().await;

        let result = post_comment(State(state.clone()), bearer_headers(), Json(payload())).await;
        let Json(posted) = result.unwrap();
        assert!(!posted.id.is_empty());
        assert_eq!(posted.body, "Hello world");

        let Json(fetched) = get_comment(State(state), Path(posted.id.clone())).await.unwrap();
        assert_eq!(fetched.id, posted.id);
    }

    #[tokio::test]
    async fn get_comment_needs_no_authorization() {
        let state = test_state().await;

        let result = get_comment(State(state), Path("no-such-id".to_string())).await;
        assert!(matches!(result, Err(ApiError::Comment(CommentError::NotFound))));
    }
}
