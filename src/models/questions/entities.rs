use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::storage::records::{Record, RecordKind};

pub const DEFAULT_QUESTION_TYPE: &str = "Múltipla Escolha";
pub const ESSAY_QUESTION_TYPE: &str = "essay";

/// 题库中的题目
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    pub subject: String,
    pub difficulty: String,
    // 展示用的题型名称
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    // "essay" 表示主观题，其他值均视为选择题
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,
    #[serde(default)]
    pub options: Vec<Value>,
    #[serde(default)]
    pub correct_answer: i64,
    #[serde(default)]
    pub tags: Vec<Value>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub usage_count: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_kind() -> String {
    DEFAULT_QUESTION_TYPE.to_string()
}

fn default_active() -> bool {
    true
}

impl Question {
    pub fn is_essay(&self) -> bool {
        self.question_type.as_deref() == Some(ESSAY_QUESTION_TYPE)
    }
}

impl Record for Question {
    const KIND: RecordKind = RecordKind::Questions;

    fn id(&self) -> &str {
        &self.id
    }

    fn is_valid(&self) -> bool {
        !self.id.is_empty()
            && !self.question.is_empty()
            && !self.subject.is_empty()
            && !self.difficulty.is_empty()
    }
}
