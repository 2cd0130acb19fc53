mod day_window;
mod filter;
mod models;
mod profile;

pub use day_window::{utc_day_window, DayWindowError};
pub use filter::filter_post_content;
pub use models::{CommentEvent, NewCommentEvent};
pub use profile::normalize_profile_url;
