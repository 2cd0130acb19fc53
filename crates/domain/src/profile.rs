const LINKEDIN_BASE: &str = "https://www.linkedin.com/";

/// 把相对的个人主页路径补全为完整的 LinkedIn URL。
/// 其他来源的绝对 URL 原样放行。
pub fn normalize_profile_url(raw: &str) -> String {
    if raw.starts_with(LINKEDIN_BASE) || raw.contains("://") {
        return raw.to_string();
    }
    format!("{}{}", LINKEDIN_BASE, raw.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_linkedin_url_passes_through() {
        assert_eq!(
            normalize_profile_url("https://www.linkedin.com/in/jane-doe"),
            "https://www.linkedin.com/in/jane-doe"
        );
    }

    #[test]
    fn relative_path_is_joined_to_base() {
        assert_eq!(
            normalize_profile_url("in/jane-doe"),
            "https://www.linkedin.com/in/jane-doe"
        );
        assert_eq!(
            normalize_profile_url("/in/jane-doe"),
            "https://www.linkedin.com/in/jane-doe"
        );
    }

    #[test]
    fn foreign_absolute_url_is_untouched() {
        assert_eq!(
            normalize_profile_url("https://example.com/in/jane"),
            "https://example.com/in/jane"
        );
    }
}
