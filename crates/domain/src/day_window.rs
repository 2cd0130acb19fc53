use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DayWindowError {
    #[error("date must be in YYYY-MM-DD format")]
    InvalidDate,
}

/// 把某时区的一个自然日换算成 UTC 的半开区间 `[start, end)`。
///
/// 时区名缺失或无法识别时退回 UTC，绝不因此让请求失败；
/// 区间终点固定为起点 + 24 小时（DST 切换日也一样）。
pub fn utc_day_window(
    date: &str,
    timezone: Option<&str>,
) -> Result<(DateTime<Utc>, DateTime<Utc>), DayWindowError> {
    let day =
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| DayWindowError::InvalidDate)?;
    let tz: Tz = timezone
        .and_then(|name| name.parse().ok())
        .unwrap_or(Tz::UTC);

    let midnight = day.and_hms_opt(0, 0, 0).ok_or(DayWindowError::InvalidDate)?;
    // DST 导致本地午夜重复时取较早的那个；午夜被跳过的罕见时区按 UTC 午夜处理
    let start_local = tz
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight).with_timezone(&tz));

    let start_utc = start_local.with_timezone(&Utc);
    Ok((start_utc, start_utc + Duration::hours(24)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    #[test]
    fn new_york_winter_day_maps_to_est_offset() {
        let (start, end) = utc_day_window("2024-01-15", Some("America/New_York")).unwrap();
        assert_eq!(start, utc(2024, 1, 15, 5));
        assert_eq!(end, utc(2024, 1, 16, 5));
    }

    #[test]
    fn missing_timezone_falls_back_to_utc() {
        let (start, end) = utc_day_window("2024-01-15", None).unwrap();
        assert_eq!(start, utc(2024, 1, 15, 0));
        assert_eq!(end, utc(2024, 1, 16, 0));
    }

    #[test]
    fn unresolvable_timezone_falls_back_to_utc() {
        let (start, _) = utc_day_window("2024-01-15", Some("Mars/Olympus_Mons")).unwrap();
        assert_eq!(start, utc(2024, 1, 15, 0));
    }

    #[test]
    fn window_is_exactly_24_hours_even_across_dst() {
        // 2024-03-10 美东进入夏令时，本地次日午夜其实只隔 23 小时，
        // 但窗口按 +24h 计算
        let (start, end) = utc_day_window("2024-03-10", Some("America/New_York")).unwrap();
        assert_eq!(start, utc(2024, 3, 10, 5));
        assert_eq!(end, utc(2024, 3, 11, 5));
    }

    #[test]
    fn malformed_date_is_an_error() {
        assert!(utc_day_window("15-01-2024", None).is_err());
        assert!(utc_day_window("2024-13-40", None).is_err());
        assert!(utc_day_window("yesterday", None).is_err());
    }
}
