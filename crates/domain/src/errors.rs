use thiserror::Error;

// 整个工作区共享的评论错误分类
#[derive(Debug, Error)]
pub enum CommentError {
    #[error("comment not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("storage failure: {0}")]
    Store(anyhow::Error),

    #[error("failed to process comment: {0}")]
    Processing(anyhow::Error),

    // 对外不暴露底层原因，原因只进日志
    #[error("failed to fetch comment by id")]
    Fetch,
}
