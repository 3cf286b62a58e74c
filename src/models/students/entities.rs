use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::storage::records::{Record, RecordKind};

pub const STUDENT_ACTIVE: &str = "active";

/// 学生记录，除下列字段外的导入列原样保留在 `extra` 中
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    // 所属年级
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serie_id: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_status() -> String {
    STUDENT_ACTIVE.to_string()
}

impl Record for Student {
    const KIND: RecordKind = RecordKind::Students;

    fn id(&self) -> &str {
        &self.id
    }

    fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.name.trim().is_empty()
    }
}
