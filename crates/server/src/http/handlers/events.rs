use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use domain::{filter_post_content, normalize_profile_url, NewCommentEvent};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{error::ApiError, state::AppState};

const REQUIRED_FIELDS: [&str; 8] = [
    "text",
    "comment_author_name",
    "comment_author_profile",
    "timestamp",
    "postId",
    "post_author_name",
    "post_author_profile",
    "post_content",
];

/// POST /comment-event
///
/// 校验必填字段、对 post_content 降噪，再按 comment_url 去重后落库。
/// 重复提交返回 200 而不是错误。
pub async fn record_comment_event(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    tracing::debug!("Incoming /comment-event POST: {}", payload);

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| payload.get(**field).is_none())
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        tracing::warn!("Rejected comment event, missing fields: {:?}", missing);
        return Err(ApiError::MissingFields { missing });
    }

    let post_content = match payload.get("post_content") {
        Some(Value::Array(entries)) => filter_post_content(entries.clone()),
        _ => {
            return Err(ApiError::BadRequest(
                "post_content must be a list/array of objects.".into(),
            ))
        }
    };

    let text_field = |name: &str| -> String {
        payload
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    // 空的作者字段按原始约定存成字面量 "empty"
    let or_empty = |s: String| if s.is_empty() { "empty".to_string() } else { s };

    let event = NewCommentEvent {
        comment_text: text_field("text"),
        author_name: or_empty(text_field("comment_author_name")),
        author_profile_url: or_empty(text_field("comment_author_profile")),
        event_timestamp: text_field("timestamp"),
        comment_url: or_empty(text_field("comment_url")),
        post_urn: text_field("postId"),
        post_author_name: text_field("post_author_name"),
        post_author_profile: text_field("post_author_profile"),
        post_content,
    };

    if state.db.comment_url_exists(&event.comment_url).await? {
        return Ok((
            StatusCode::OK,
            Json(json!({ "message": "Duplicate comment, already exists." })),
        ));
    }
    state.db.insert_event(&event).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Comment event persisted." })),
    ))
}

// limit / offset 按原始文本接收，自己解析，错误消息才能保持精确
#[derive(Deserialize, Default)]
pub struct ListQuery {
    pub author_profile: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /comment-event
///
/// 按作者列出事件，event_timestamp 降序，`[offset, offset+limit-1]` 分页。
pub async fn list_comment_events(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Value>, ApiError> {
    let author_profile = params
        .author_profile
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest("Missing required query param: author_profile".into())
        })?;
    let author_profile = normalize_profile_url(&author_profile);

    let limit = match params.limit.as_deref() {
        None | Some("") => 100,
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| ApiError::BadRequest("limit must be a positive integer".into()))?,
    };
    let offset = match params.offset.as_deref() {
        None | Some("") => 0,
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .filter(|n| *n >= 0)
            .ok_or_else(|| {
                ApiError::BadRequest("offset must be a non-negative integer".into())
            })?,
    };

    let events = state
        .db
        .list_events(
            &author_profile,
            limit,
            offset,
            params.start_date.as_deref().filter(|s| !s.is_empty()),
            params.end_date.as_deref().filter(|s| !s.is_empty()),
        )
        .await?;

    Ok(Json(json!({ "events": events })))
}
