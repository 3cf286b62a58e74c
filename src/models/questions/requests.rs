use serde_json::{Map, Value};

use crate::utils::json::is_truthy;

/// 创建题目时必须提供的字段
pub const REQUIRED_QUESTION_FIELDS: [&str; 3] = ["question", "subject", "difficulty"];

/// 返回缺失（或为空）的必填字段
pub fn missing_question_fields(body: &Map<String, Value>) -> Vec<&'static str> {
    REQUIRED_QUESTION_FIELDS
        .iter()
        .copied()
        .filter(|field| !body.get(*field).is_some_and(is_truthy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields() {
        let Value::Object(body) = json!({"question": "2+2?", "subject": ""}) else {
            unreachable!()
        };
        assert_eq!(missing_question_fields(&body), vec!["subject", "difficulty"]);
    }
}
