use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 一条已落库的评论事件。
///
/// `event_timestamp` 是采集端给出的 ISO-8601 字符串，服务端从不生成；
/// 排序与日期过滤都基于它。`post_content` 是抓取到的 DOM 片段数组，
/// 结构不固定，入库前已经过降噪过滤。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentEvent {
    pub id: i64,
    pub comment_text: String,
    pub author_name: String,
    pub author_profile_url: String,
    pub event_timestamp: String,
    pub comment_url: String,
    pub post_urn: String,
    pub post_author_name: String,
    pub post_author_profile: String,
    pub post_content: Vec<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 待插入的评论事件（尚无 id 和服务端时间戳）。
///
/// `comment_url` 是天然去重键：已存在时再次插入是幂等成功，不是错误。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCommentEvent {
    pub comment_text: String,
    pub author_name: String,
    pub author_profile_url: String,
    pub event_timestamp: String,
    pub comment_url: String,
    pub post_urn: String,
    pub post_author_name: String,
    pub post_author_profile: String,
    pub post_content: Vec<Value>,
}
