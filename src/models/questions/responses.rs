use serde::Serialize;

use super::entities::Question;

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub question: Question,
}
