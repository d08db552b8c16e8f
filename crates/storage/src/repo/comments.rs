use crate::{models::SqlComment, Db};
use domain::Comment;
use uuid::Uuid;

impl Db {
    // 写入评论。调用方传入的 id 一律忽略，由存储层统一分配
    pub async fn insert_comment(&self, c: &Comment) -> anyhow::Result<Comment> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO comments (id, slug, author, body)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&c.slug)
        .bind(&c.author)
        .bind(&c.body)
        .execute(&self.pool)
        .await?;

        Ok(Comment {
            id,
            slug: c.slug.clone(),
            author: c.author.clone(),
            body: c.body.clone(),
        })
    }

    pub async fn get_comment(&self, id: &str) -> anyhow::Result<Option<Comment>> {
        let row = sqlx::query_as::<_, SqlComment>(
            "SELECT id, slug, author, body FROM comments WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    // 整行替换；目标行不存在时返回 None
    pub async fn update_comment(&self, id: &str, c: &Comment) -> anyhow::Result<Option<Comment>> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET slug = ?, author = ?, body = ?
            WHERE id = ?
            "#,
        )
        .bind(&c.slug)
        .bind(&c.author)
        .bind(&c.body)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Comment {
            id: id.to_string(),
            slug: c.slug.clone(),
            author: c.author.clone(),
            body: c.body.clone(),
        }))
    }

    // 删除不存在的行同样视为成功，保证幂等
    pub async fn delete_comment(&self, id: &str) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
