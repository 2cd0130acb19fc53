use chrono::{DateTime, Utc};
use domain::CommentEvent;
use sqlx::FromRow;

#[derive(FromRow)]
pub struct SqlCommentEvent {
    pub id: i64,
    pub comment_text: String,
    pub author_name: String,
    pub author_profile_url: String,
    pub event_timestamp: String,
    pub comment_url: String,
    pub post_urn: String,
    pub post_author_name: String,
    pub post_author_profile: String,
    pub post_content: String, // JSON 文本
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SqlCommentEvent> for CommentEvent {
    fn from(sql: SqlCommentEvent) -> Self {
        let post_content = serde_json::from_str(&sql.post_content).unwrap_or_else(|e| {
            tracing::warn!("Corrupt post_content JSON for event {}: {}", sql.id, e);
            Vec::new()
        });
        CommentEvent {
            id: sql.id,
            comment_text: sql.comment_text,
            author_name: sql.author_name,
            author_profile_url: sql.author_profile_url,
            event_timestamp: sql.event_timestamp,
            comment_url: sql.comment_url,
            post_urn: sql.post_urn,
            post_author_name: sql.post_author_name,
            post_author_profile: sql.post_author_profile,
            post_content,
            created_at: sql.created_at,
            updated_at: sql.updated_at,
        }
    }
}
