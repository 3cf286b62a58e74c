use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::storage::records::{Record, RecordKind};

/// 一次考试应用（某个评估在某个班级的施测）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub applied_count: i64,
    #[serde(default)]
    pub completed_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub fn default_status() -> String {
    "active".to_string()
}

impl Record for Application {
    const KIND: RecordKind = RecordKind::Applications;

    fn id(&self) -> &str {
        &self.id
    }
}
