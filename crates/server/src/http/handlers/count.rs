use axum::{
    extract::{Query, State},
    Json,
};
use domain::{normalize_profile_url, utc_day_window};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize, Default)]
pub struct CountQuery {
    pub author_profile: Option<String>,
    pub date: Option<String>,
    pub timezone: Option<String>,
}

/// GET /comment-count
///
/// 统计作者在指定时区某个自然日内的事件数。时区无法识别时退回 UTC。
pub async fn comment_count(
    State(state): State<AppState>,
    Query(params): Query<CountQuery>,
) -> Result<Json<Value>, ApiError> {
    let (author_profile, date) = match (
        params.author_profile.filter(|s| !s.is_empty()),
        params.date.filter(|s| !s.is_empty()),
    ) {
        (Some(author), Some(date)) => (author, date),
        _ => {
            return Err(ApiError::BadRequest(
                "Missing required query params: author_profile and date".into(),
            ))
        }
    };
    let author_profile = normalize_profile_url(&author_profile);

    let (start_utc, end_utc) = utc_day_window(&date, params.timezone.as_deref())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let count = state
        .db
        .count_events_between(&author_profile, start_utc, end_utc)
        .await?;

    Ok(Json(json!({ "count": count })))
}
