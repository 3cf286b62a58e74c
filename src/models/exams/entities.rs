use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::questions::entities::{ESSAY_QUESTION_TYPE, Question};
use crate::storage::records::{Record, RecordKind};

pub const EXAM_DRAFT: &str = "Rascunho";
pub const EXAM_ACTIVE: &str = "Ativo";
pub const SIMULADO_TYPE: &str = "simulado";

/// 嵌入在评估中的题目快照
///
/// 评估保存的是组卷时题目的副本，之后题库的修改不会影响已组好的评估。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,
    #[serde(default)]
    pub options: Vec<Value>,
    // 原样保存，评分时只认整数下标
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExamQuestion {
    pub fn is_essay(&self) -> bool {
        self.question_type.as_deref() == Some(ESSAY_QUESTION_TYPE)
    }

    /// 正确答案下标，非整数视为没有
    pub fn correct_index(&self) -> Option<i64> {
        self.correct_answer.as_ref().and_then(Value::as_i64)
    }
}

impl From<Question> for ExamQuestion {
    fn from(q: Question) -> Self {
        let mut extra = q.extra;
        extra.insert("difficulty".into(), Value::String(q.difficulty));
        extra.insert("type".into(), Value::String(q.kind));
        extra.insert("tags".into(), Value::Array(q.tags));

        Self {
            id: Some(q.id),
            question: Some(q.question),
            subject: Some(q.subject),
            question_type: q.question_type,
            options: q.options,
            correct_answer: Some(Value::from(q.correct_answer)),
            explanation: Some(q.explanation),
            extra,
        }
    }
}

/// 评估（普通评估与模拟考试共用）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<ExamQuestion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    // 分钟
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions_per_subject: Option<i64>,
    #[serde(default)]
    pub applied_count: i64,
    #[serde(default)]
    pub students_count: i64,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_applied: Option<String>,
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
    EXAM_DRAFT.to_string()
}

impl Exam {
    pub fn is_active(&self) -> bool {
        self.status == EXAM_ACTIVE
    }
}

impl Record for Exam {
    const KIND: RecordKind = RecordKind::Exams;

    fn id(&self) -> &str {
        &self.id
    }

    fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.title.trim().is_empty()
    }
}
