use crate::auth::TokenGuard;
use service::CommentService;

#[derive(Clone)]
pub struct AppState {
    pub service: CommentService,
    pub auth: TokenGuard,
}
