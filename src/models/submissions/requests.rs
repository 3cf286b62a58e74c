use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmissionRequest {
    pub review_notes: Option<Value>,
    pub feedback: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkExportRequest {
    #[serde(default)]
    pub submission_ids: Value,
    pub format: Option<String>,
}

impl BulkExportRequest {
    /// 非空字符串数组，否则返回 None
    pub fn ids(&self) -> Option<Vec<String>> {
        let ids: Vec<String> = self
            .submission_ids
            .as_array()?
            .iter()
            .filter_map(|id| match id {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect();
        if ids.is_empty() { None } else { Some(ids) }
    }
}
