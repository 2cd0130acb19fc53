use super::handlers::{count, events, root};
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

pub fn build_router(state: AppState) -> Router {
    // 采集端是浏览器扩展，来源不固定，全部放行；只允许 Content-Type 头
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(600));

    Router::new()
        .route("/", get(root::index))
        .route(
            "/comment-event",
            get(events::list_comment_events).post(events::record_comment_event),
        )
        .route("/comment-count", get(count::comment_count))
        .layer(cors)
        .with_state(state)
}
