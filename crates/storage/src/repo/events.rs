use crate::{models::SqlCommentEvent, Db};
use chrono::{DateTime, SecondsFormat, Utc};
use domain::{CommentEvent, NewCommentEvent};

impl Db {
    /// 去重检查。先查后写，写入方持有竞态风险（见 migration 注释）。
    pub async fn comment_url_exists(&self, comment_url: &str) -> anyhow::Result<bool> {
        let row = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM comment_events WHERE comment_url = ? LIMIT 1",
        )
        .bind(comment_url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }

    /// 插入一条事件。created_at / updated_at 由服务端在此刻赋值，
    /// 之后不再变化（只追加，无更新路径）。
    pub async fn insert_event(&self, event: &NewCommentEvent) -> anyhow::Result<()> {
        let now = Utc::now();
        let post_content = serde_json::to_string(&event.post_content)?;
        sqlx::query(
            r#"
            INSERT INTO comment_events (
                comment_text, author_name, author_profile_url,
                event_timestamp, comment_url,
                post_urn, post_author_name, post_author_profile,
                post_content, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&event.comment_text)
        .bind(&event.author_name)
        .bind(&event.author_profile_url)
        .bind(&event.event_timestamp)
        .bind(&event.comment_url)
        .bind(&event.post_urn)
        .bind(&event.post_author_name)
        .bind(&event.post_author_profile)
        .bind(post_content)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// 按作者列出事件，event_timestamp 降序，LIMIT/OFFSET 分页。
    /// start_date / end_date 是闭区间端点，直接和存储的 ISO 串比较。
    pub async fn list_events(
        &self,
        author_profile_url: &str,
        limit: i64,
        offset: i64,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> anyhow::Result<Vec<CommentEvent>> {
        let mut sql = String::from(
            "SELECT id, comment_text, author_name, author_profile_url, \
             event_timestamp, comment_url, post_urn, post_author_name, \
             post_author_profile, post_content, created_at, updated_at \
             FROM comment_events WHERE author_profile_url = ?",
        );
        if start_date.is_some() {
            sql.push_str(" AND event_timestamp >= ?");
        }
        if end_date.is_some() {
            sql.push_str(" AND event_timestamp <= ?");
        }
        sql.push_str(" ORDER BY event_timestamp DESC LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, SqlCommentEvent>(&sql).bind(author_profile_url);
        if let Some(start) = start_date {
            query = query.bind(start);
        }
        if let Some(end) = end_date {
            query = query.bind(end);
        }
        let rows = query
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// 统计作者在 UTC 半开区间 `[start, end)` 内的事件数。
    pub async fn count_events_between(
        &self,
        author_profile_url: &str,
        start_utc: DateTime<Utc>,
        end_utc: DateTime<Utc>,
    ) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM comment_events
            WHERE author_profile_url = ?
              AND event_timestamp >= ?
              AND event_timestamp < ?
            "#,
        )
        .bind(author_profile_url)
        .bind(start_utc.to_rfc3339_opts(SecondsFormat::Secs, true))
        .bind(end_utc.to_rfc3339_opts(SecondsFormat::Secs, true))
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
