use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// 页面抓取会把交互控件的文案（"Like"、"Reply"、"Show more"…）混进正文，
// 这里整串匹配，避免误杀包含这些词的真实内容。
static UI_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:like|repost|comment|send|reply|add a comment(?:…|\.\.\.)?|open emoji keyboard|✨ generate comment|activate to view larger image,?|load more comments|follow|see more|see less|show more|show less|copy link|share|save|edit|delete|report|view more|view less|most relevant)$",
    )
    .expect("UI noise pattern is valid")
});

// "42 comments"、"42 comments on Jane Doe's post" 这类计数标签
static COMMENT_COUNT_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\s*comment(s)?( on .*)?$").expect("comment count pattern is valid")
});

// LinkedIn 头像缩略图 URL，与正文图片无关，属于重复噪声
static PROFILE_PHOTO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https://media\.licdn\.com/dms/image/v2/[^/]+/profile-displayphoto-shrink_100_100/profile-displayphoto-shrink_100_100/.*$",
    )
    .expect("profile photo pattern is valid")
});

/// 对抓取到的 `post_content` 做降噪：去掉 UI 控件文案、评论计数标签
/// 和头像缩略图，保留顺序，保留的条目原样不动。
pub fn filter_post_content(entries: Vec<Value>) -> Vec<Value> {
    entries.into_iter().filter(is_relevant).collect()
}

fn is_relevant(entry: &Value) -> bool {
    match entry.get("data").and_then(Value::as_str) {
        Some(data) => {
            let data = data.trim();
            !(UI_NOISE.is_match(data)
                || COMMENT_COUNT_LABEL.is_match(data)
                || PROFILE_PHOTO_URL.is_match(data))
        }
        // 没有文本 data 字段的条目视为正文，除非本身就是头像 URL 字符串
        None => match entry.as_str() {
            Some(s) => !PROFILE_PHOTO_URL.is_match(s.trim()),
            None => true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(data: &str) -> Value {
        json!({ "type": "text", "data": data })
    }

    #[test]
    fn drops_ui_noise_phrases_case_insensitively() {
        let input = vec![
            entry("Like"),
            entry("REPLY"),
            entry("Show more"),
            entry("  follow  "),
            entry("Open Emoji Keyboard"),
            entry("✨ Generate comment"),
            entry("Add a comment…"),
            entry("Add a comment..."),
            entry("Activate to view larger image,"),
        ];
        assert!(filter_post_content(input).is_empty());
    }

    #[test]
    fn keeps_substantive_text() {
        let input = vec![
            entry("Excited to announce my new role at Acme Corp!"),
            entry("I'd like to share a few thoughts on this."),
        ];
        assert_eq!(filter_post_content(input).len(), 2);
    }

    #[test]
    fn drops_comment_count_labels() {
        for label in ["42 comment", "42 comments", "42 comments on Jane Doe's post", "7comments"] {
            assert!(
                filter_post_content(vec![entry(label)]).is_empty(),
                "{label:?} should be dropped"
            );
        }
    }

    #[test]
    fn keeps_text_that_merely_mentions_comments() {
        let kept = filter_post_content(vec![entry("42 great comments")]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn drops_profile_photo_thumbnails() {
        let photo = entry(
            "https://media.licdn.com/dms/image/v2/ABC/profile-displayphoto-shrink_100_100/profile-displayphoto-shrink_100_100/xyz",
        );
        assert!(filter_post_content(vec![photo]).is_empty());
    }

    #[test]
    fn keeps_other_image_urls() {
        let image = entry("https://media.licdn.com/dms/image/v2/ABC/feedshare-shrink_800/0/xyz");
        assert_eq!(filter_post_content(vec![image]).len(), 1);
    }

    #[test]
    fn keeps_entries_without_a_text_data_field() {
        let input = vec![
            json!({ "type": "image", "width": 800 }),
            json!({ "data": 42 }),
            json!(null),
        ];
        assert_eq!(filter_post_content(input).len(), 3);
    }

    #[test]
    fn bare_string_entries_only_checked_against_photo_url() {
        let input = vec![
            json!("Like"),
            json!("https://media.licdn.com/dms/image/v2/ABC/profile-displayphoto-shrink_100_100/profile-displayphoto-shrink_100_100/xyz"),
        ];
        let kept = filter_post_content(input);
        assert_eq!(kept, vec![json!("Like")]);
    }

    #[test]
    fn preserves_order_and_does_not_mutate_kept_entries() {
        let input = vec![
            entry("First real paragraph"),
            entry("Like"),
            entry("  padded but substantive  "),
            entry("12 comments"),
            entry("Closing thoughts"),
        ];
        let kept = filter_post_content(input);
        assert_eq!(
            kept,
            vec![
                entry("First real paragraph"),
                entry("  padded but substantive  "),
                entry("Closing thoughts"),
            ]
        );
    }
}
