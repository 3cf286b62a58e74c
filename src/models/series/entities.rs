use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::storage::records::{Record, RecordKind};

pub const DEFAULT_LEVEL: &str = "fundamental1";

/// 年级（Série）
///
/// 只对业务规则读取的字段做类型约束，description、level、grade 等
/// 展示字段保留在 `extra` 中，更新时可被请求体任意覆盖。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub student_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Series {
    pub fn has_students(&self) -> bool {
        self.student_count > 0
    }
}

impl Record for Series {
    const KIND: RecordKind = RecordKind::Series;

    fn id(&self) -> &str {
        &self.id
    }

    fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && !self.code.is_empty()
    }
}
