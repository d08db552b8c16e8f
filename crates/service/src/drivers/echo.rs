use anyhow::Result;
use async_trait::async_trait;
use domain::Comment;

use crate::traits::ContentProcessor;

// 演示用加工器：把三个内容字段统一替换为固定文本
pub struct EchoProcessor {
    text: String,
}

impl EchoProcessor {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

#[async_trait]
impl ContentProcessor for EchoProcessor {
    async fn process(&self, comment: Comment) -> Result<Comment> {
        Ok(Comment {
            id: comment.id,
            slug: self.text.clone(),
            author: self.text.clone(),
            body: self.text.clone(),
        })
    }
}
