use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::storage::records::{Record, RecordKind};

/// 班级
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: String,
    #[serde(default)]
    pub student_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Class {
    const KIND: RecordKind = RecordKind::Classes;

    fn id(&self) -> &str {
        &self.id
    }
}
