//! JSON 记录的浅合并工具

use serde_json::{Map, Value};

use crate::errors::SeiceError;

/// 更新时不可由请求体覆盖的字段
pub const OWNED_FIELDS: [&str; 3] = ["id", "userId", "createdAt"];

pub fn into_object(value: Value) -> Result<Map<String, Value>, SeiceError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(SeiceError::validation("Request body must be a JSON object")),
    }
}

/// 将补丁浅合并到已存储的记录上，跳过受保护字段并刷新 `updatedAt`
pub fn merge_patch(
    stored: &mut Map<String, Value>,
    patch: Map<String, Value>,
    protected: &[&str],
    now: &str,
) {
    for (key, value) in patch {
        if protected.contains(&key.as_str()) {
            continue;
        }
        stored.insert(key, value);
    }
    stored.insert("updatedAt".to_string(), Value::String(now.to_string()));
}

pub fn remove_nulls(map: &mut Map<String, Value>) {
    map.retain(|_, value| !value.is_null());
}

/// 类似 JS `parseInt`：取字符串开头的整数部分
pub fn parse_int_like(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim_start();
            let (sign, digits) = match s.strip_prefix('-') {
                Some(rest) => (-1, rest),
                None => (1, s.strip_prefix('+').unwrap_or(s)),
            };
            let end = digits
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(digits.len());
            digits[..end].parse::<i64>().ok().map(|n| sign * n)
        }
        _ => None,
    }
}

/// JS 真值判断，用于 `value || default` 形式的默认值
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_keeps_owned_fields() {
        let mut stored = into_object(json!({
            "id": "s1",
            "userId": "u1",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "name": "Ana"
        }))
        .unwrap();
        let patch = into_object(json!({"id": "hack", "name": "Ana Paula", "class": "7A"})).unwrap();

        merge_patch(&mut stored, patch, &OWNED_FIELDS, "2024-02-01T00:00:00.000Z");
        assert_eq!(stored["id"], "s1");
        assert_eq!(stored["name"], "Ana Paula");
        assert_eq!(stored["class"], "7A");
        assert_eq!(stored["updatedAt"], "2024-02-01T00:00:00.000Z");
    }

    #[test]
    fn test_into_object_rejects_arrays() {
        assert!(into_object(json!([1, 2])).is_err());
    }

    #[test]
    fn test_parse_int_like() {
        assert_eq!(parse_int_like(&json!("7º ano")), Some(7));
        assert_eq!(parse_int_like(&json!(" 12")), Some(12));
        assert_eq!(parse_int_like(&json!(3.9)), Some(3));
        assert_eq!(parse_int_like(&json!("ano 7")), None);
        assert_eq!(parse_int_like(&json!(null)), None);
    }

    #[test]
    fn test_remove_nulls() {
        let mut map = into_object(json!({"a": null, "b": 0})).unwrap();
        remove_nulls(&mut map);
        assert!(!map.contains_key("a"));
        assert!(map.contains_key("b"));
    }
}
