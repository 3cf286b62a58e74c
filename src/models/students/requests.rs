use serde::Deserialize;
use serde_json::Value;

/// 批量导入请求，`students` 必须是数组，否则返回 400
#[derive(Debug, Deserialize)]
pub struct CreateStudentsRequest {
    #[serde(default)]
    pub students: Value,
}
