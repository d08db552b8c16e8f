mod errors;
mod models;

pub use errors::CommentError;
pub use models::Comment;
