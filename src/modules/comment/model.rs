use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::{
    db::DBClient,
    dto::Pagination,
    modules::comment::dto::NewComment,
};
use sqlx::{Error as SqlxError, query_as, FromRow};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub uri: String,
    pub uri_encoded: String,
    pub nickname: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub content: String,
    pub inserted_at: DateTime<Utc>,
}

#[async_trait]
pub trait CommentRepository {
    async fn save_comment(&self, data: NewComment) -> Result<Comment, SqlxError>;
    async fn get_comments_by_uri(&self, uri_encoded: &str, pagination: Pagination) -> Result<Vec<Comment>, SqlxError>;
}

#[async_trait]
impl CommentRepository for DBClient {
    async fn save_comment(&self, data: NewComment) -> Result<Comment, SqlxError> {
        let new_comment = query_as::<_, Comment>(
            r#"
                INSERT INTO comments (created_at, updated_at, uri, uri_encoded, nickname, email, title, content, inserted_at)
                VALUES (?1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?1)
                RETURNING id, created_at, updated_at, deleted_at, uri, uri_encoded, nickname, email, title, content, inserted_at;
            "#,
        )
        .bind(data.inserted_at)
        .bind(data.uri)
        .bind(data.uri_encoded)
        .bind(data.nickname)
        .bind(data.email)
        .bind(data.title)
        .bind(data.content)
        .fetch_one(&self.pool).await?;
        Ok(new_comment)
    }
    async fn get_comments_by_uri(&self, uri_encoded: &str, pagination: Pagination) -> Result<Vec<Comment>, SqlxError> {
        let comments = query_as::<_, Comment>(
            r#"
                SELECT id, created_at, updated_at, deleted_at, uri, uri_encoded, nickname, email, title, content, inserted_at
                FROM comments
                WHERE uri_encoded = ?1 AND deleted_at IS NULL
                ORDER BY inserted_at DESC, id DESC
                LIMIT ?2 OFFSET ?3;
            "#,
        )
        .bind(uri_encoded)
        .bind(pagination.page_size)
        .bind(pagination.offset())
        .fetch_all(&self.pool).await?;
        Ok(comments)
    }
}
