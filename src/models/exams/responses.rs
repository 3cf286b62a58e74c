use serde::Serialize;

use super::entities::{Exam, ExamQuestion};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamListResponse {
    pub exams: Vec<Exam>,
    pub count: usize,
    pub active_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ExamResponse {
    pub exam: Exam,
}

/// 学生端可见的评估内容
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicExam {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_per_subject: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    pub questions: Vec<ExamQuestion>,
}

impl From<Exam> for PublicExam {
    fn from(exam: Exam) -> Self {
        Self {
            id: exam.id,
            title: exam.title,
            description: exam.description,
            time_limit: exam.time_limit,
            total_questions: exam.total_questions,
            questions_per_subject: exam.questions_per_subject,
            subjects: exam.subjects,
            questions: exam.questions.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicExamResponse {
    pub exam: PublicExam,
    pub session_id: String,
}
