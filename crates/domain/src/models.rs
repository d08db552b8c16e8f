use serde::{Deserialize, Serialize};

use crate::errors::CommentError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    // 由存储层在创建时分配，创建请求中为空
    pub id: String,
    pub slug: String,
    pub author: String,
    pub body: String,
}

impl Comment {
    pub fn new(
        slug: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            slug: slug.into(),
            author: author.into(),
            body: body.into(),
        }
    }

    // 创建评论前的基础校验
    pub fn validate(&self) -> Result<(), CommentError> {
        if self.slug.is_empty() || self.author.is_empty() || self.body.is_empty() {
            return Err(CommentError::Validation("not a valid comment".to_string()));
        }
        Ok(())
    }
}
