use chrono::{SecondsFormat, Utc};

/// 当前时间的 ISO 8601 字符串（毫秒精度，UTC）
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 评估 ID：`EVAL` 加上毫秒时间戳的后 6 位
pub fn exam_id_from_millis(millis: i64) -> String {
    let digits = millis.to_string();
    let tail = &digits[digits.len().saturating_sub(6)..];
    format!("EVAL{tail}")
}

pub fn new_exam_id() -> String {
    exam_id_from_millis(Utc::now().timestamp_millis())
}

pub fn current_year() -> String {
    Utc::now().format("%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_id_uses_last_six_digits() {
        assert_eq!(exam_id_from_millis(1_717_171_234_567), "EVAL234567");
        assert_eq!(exam_id_from_millis(42), "EVAL42");
    }

    #[test]
    fn test_now_iso_is_sortable() {
        let ts = now_iso();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2024-01-01T00:00:00.000Z".len());
    }
}
