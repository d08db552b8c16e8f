use std::sync::Arc;

use domain::{Comment, CommentError};
use storage::CommentStore;
use tracing::error;

use crate::traits::ContentProcessor;

#[derive(Clone)]
pub struct CommentService {
    store: Arc<dyn CommentStore>,
    processor: Arc<dyn ContentProcessor>,
}

impl CommentService {
    pub fn new(store: Arc<dyn CommentStore>, processor: Arc<dyn ContentProcessor>) -> Self {
        Self { store, processor }
    }

    // 读取失败对外收窄为统一的 Fetch，具体原因只进日志；
    // NotFound 原样放行，网关靠它映射 404
    pub async fn get_comment(&self, id: &str) -> Result<Comment, CommentError> {
        match self.store.get(id).await {
            Ok(c) => Ok(c),
            Err(CommentError::NotFound) => Err(CommentError::NotFound),
            Err(e) => {
                error!("Failed to fetch comment {}: {:?}", id, e);
                Err(CommentError::Fetch)
            }
        }
    }

    // 两阶段写入：先落库，再加工，最后用加工结果覆盖原记录。
    // 第二、三阶段失败时错误照常上抛，但第一阶段的记录保持原样，不做补偿删除。
    // 返回的始终是加工前的版本，需要加工结果的调用方按 id 重新获取。
    pub async fn post_comment(&self, comment: &Comment) -> Result<Comment, CommentError> {
        let inserted = self.store.create(comment).await?;

        let processed = match self.processor.process(inserted.clone()).await {
            Ok(p) => p,
            Err(e) => {
                error!("Failed to process comment {}: {:?}", inserted.id, e);
                return Err(CommentError::Processing(e));
            }
        };

        self.store.update(&inserted.id, &processed).await?;

        Ok(inserted)
    }

    pub async fn update_comment(
        &self,
        id: &str,
        comment: &Comment,
    ) -> Result<Comment, CommentError> {
        self.store.update(id, comment).await
    }

    pub async fn delete_comment(&self, id: &str) -> Result<(), CommentError> {
        self.store.delete(id).await
    }
}
