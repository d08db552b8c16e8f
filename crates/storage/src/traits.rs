use async_trait::async_trait;
use domain::{Comment, CommentError};

use crate::Db;

// 服务层依赖的持久化边界
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Comment, CommentError>;
    async fn create(&self, comment: &Comment) -> Result<Comment, CommentError>;
    async fn update(&self, id: &str, comment: &Comment) -> Result<Comment, CommentError>;
    async fn delete(&self, id: &str) -> Result<(), CommentError>;
}

#[async_trait]
impl CommentStore for Db {
    async fn get(&self, id: &str) -> Result<Comment, CommentError> {
        match self.get_comment(id).await {
            Ok(Some(c)) => Ok(c),
            Ok(None) => Err(CommentError::NotFound),
            Err(e) => Err(CommentError::Store(e)),
        }
    }

    async fn create(&self, comment: &Comment) -> Result<Comment, CommentError> {
        self.insert_comment(comment)
            .await
            .map_err(CommentError::Store)
    }

    async fn update(&self, id: &str, comment: &Comment) -> Result<Comment, CommentError> {
        match self.update_comment(id, comment).await {
            Ok(Some(c)) => Ok(c),
            Ok(None) => Err(CommentError::NotFound),
            Err(e) => Err(CommentError::Store(e)),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), CommentError> {
        self.delete_comment(id).await.map_err(CommentError::Store)
    }
}
