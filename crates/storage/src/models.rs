use domain::Comment;
use sqlx::FromRow;

#[derive(FromRow)]
pub struct SqlComment {
    pub id: String,
    pub slug: String,
    pub author: String,
    pub body: String,
}

impl From<SqlComment> for Comment {
    fn from(sql: SqlComment) -> Self {
        Comment {
            id: sql.id,
            slug: sql.slug,
            author: sql.author,
            body: sql.body,
        }
    }
}
