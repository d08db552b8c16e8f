use anyhow::Result;
use async_trait::async_trait;
use domain::Comment;

// 内容加工器：输入一条已落库的评论，输出加工后的副本。
// 必须保持 id 不变，不得触碰存储状态。
#[async_trait]
pub trait ContentProcessor: Send + Sync {
    async fn process(&self, comment: Comment) -> Result<Comment>;
}
