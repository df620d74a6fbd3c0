//! 时间工具模块
//!
//! 后端以 ISO-8601 本地时间（无时区）传输所有时间字段，
//! 这里统一封装毫秒时间戳与 `NaiveDateTime` 之间的转换及显示格式化。

use chrono::{NaiveDate, NaiveDateTime};

/// 一天的毫秒数，用于合成数据的时间回退
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// 从 Unix 毫秒时间戳构造 `NaiveDateTime`
///
/// 越界的输入回退到 Unix 纪元，避免在渲染路径上 panic。
#[inline]
pub fn from_unix_millis(ms: i64) -> NaiveDateTime {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}

/// 转回 Unix 毫秒时间戳
#[inline]
pub fn to_unix_millis(dt: &NaiveDateTime) -> i64 {
    dt.and_utc().timestamp_millis()
}

/// 按 ISO-8601 / RFC 3339 解析时间字符串
///
/// 返回 None 如果解析失败
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

// =========================================================
// 显示格式化 (Display Formatting)
// =========================================================

/// 列表与卡片中统一使用的时间显示格式
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 仅日期部分
pub fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// 可选时间字段的显示，缺失时显示占位符
pub fn format_optional(dt: &Option<NaiveDateTime>) -> String {
    match dt {
        Some(dt) => format_datetime(dt),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip() {
        let ms = 1_700_000_000_123;
        let dt = from_unix_millis(ms);
        assert_eq!(to_unix_millis(&dt), ms);
    }

    #[test]
    fn parses_backend_local_datetime() {
        // Spring 的 LocalDateTime 序列化格式，带或不带小数秒
        let dt = parse_datetime("2026-08-07T10:30:00").unwrap();
        assert_eq!(format_datetime(&dt), "2026-08-07 10:30:00");

        assert!(parse_datetime("2026-08-07T10:30:00.123").is_some());
        assert!(parse_datetime("not a date").is_none());
    }

    #[test]
    fn optional_formatting_uses_placeholder() {
        assert_eq!(format_optional(&None), "N/A");
    }
}
