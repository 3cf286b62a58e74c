use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::storage::records::{Record, RecordKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradingStatus {
    // 全部为选择题，已自动评分
    Graded,
    // 含主观题，等待人工批改
    PendingReview,
    Reviewed,
    Pending,
}

impl GradingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GradingStatus::Graded => "graded",
            GradingStatus::PendingReview => "pending-review",
            GradingStatus::Reviewed => "reviewed",
            GradingStatus::Pending => "pending",
        }
    }
}

/// 单题评分结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "questionType", rename_all = "kebab-case")]
pub enum QuestionResult {
    #[serde(rename_all = "camelCase")]
    MultipleChoice {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        question_id: Option<String>,
        question: Option<String>,
        user_answer: Value,
        #[serde(default)]
        correct_answer: Option<Value>,
        is_correct: bool,
        explanation: String,
    },
    #[serde(rename_all = "camelCase")]
    Essay {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        question_id: Option<String>,
        question: Option<String>,
        essay_answer: String,
        is_correct: Option<bool>,
        requires_manual_grading: bool,
    },
}

impl QuestionResult {
    pub fn requires_manual_grading(&self) -> bool {
        matches!(
            self,
            QuestionResult::Essay {
                requires_manual_grading: true,
                ..
            }
        )
    }
}

/// 作答记录
///
/// 自动评分和手动录入的作答共用此结构，作答细节（answers、results 等）
/// 不做类型约束，统计只读取下列字段。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grading_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Submission {
    /// 缺失时按 0 计
    pub fn percentage_or_zero(&self) -> f64 {
        self.percentage
            .as_ref()
            .and_then(Number::as_f64)
            .unwrap_or(0.0)
    }

    pub fn has_status(&self, status: GradingStatus) -> bool {
        self.grading_status.as_deref() == Some(status.as_str())
    }
}

impl Record for Submission {
    const KIND: RecordKind = RecordKind::Submissions;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_result_wire_format() {
        let essay = QuestionResult::Essay {
            question_id: Some("q1".into()),
            question: Some("Explique a fotossíntese".into()),
            essay_answer: "...".into(),
            is_correct: None,
            requires_manual_grading: true,
        };
        let value = serde_json::to_value(&essay).unwrap();
        assert_eq!(value["questionType"], "essay");
        assert_eq!(value["isCorrect"], Value::Null);
        assert_eq!(value["requiresManualGrading"], true);
        assert!(essay.requires_manual_grading());

        let anonymous = QuestionResult::MultipleChoice {
            question_id: None,
            question: Some("3x3?".into()),
            user_answer: json!("9"),
            correct_answer: Some(json!(2)),
            is_correct: false,
            explanation: String::new(),
        };
        let value = serde_json::to_value(&anonymous).unwrap();
        assert!(value.get("questionId").is_none());
        assert_eq!(value["userAnswer"], "9");
    }

    #[test]
    fn test_manual_submission_keeps_unknown_fields() {
        let submission: Submission = serde_json::from_value(json!({
            "id": "s1",
            "percentage": 72.5,
            "answers": ["A", "C"],
            "gradingStatus": "reviewed"
        }))
        .unwrap();
        assert_eq!(submission.percentage_or_zero(), 72.5);
        assert!(submission.has_status(GradingStatus::Reviewed));
        assert_eq!(submission.extra["answers"], json!(["A", "C"]));
    }
}
