use serde::Deserialize;
use serde_json::Value;

/// 创建年级请求，字段宽松解析，由服务层规范化
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSeriesRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub grade: Option<Value>,
    pub is_active: Option<bool>,
    pub max_students: Option<Value>,
    pub academic_year: Option<Value>,
}
