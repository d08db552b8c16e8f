use anyhow::Result;
use async_trait::async_trait;
use domain::Comment;

use crate::traits::ContentProcessor;

// 原样放行，用于不需要加工的部署
pub struct IdentityProcessor;

#[async_trait]
impl ContentProcessor for IdentityProcessor {
    async fn process(&self, comment: Comment) -> Result<Comment> {
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_comment_through_unchanged() {
        let mut input = Comment::new("s1", "Imraan", "Hello world");
        input.id = "abc-123".to_string();

        let out = IdentityProcessor.process(input.clone()).await.unwrap();
        assert_eq!(out, input);
    }
}
