use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::{Map, json};
use tracing::info;

use super::scoring::score_exam;
use super::{ExamService, find_exam_for_submission};
use crate::middlewares::RequireJWT;
use crate::models::exams::requests::SubmitExamRequest;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, internal_error, not_found};
use crate::storage::records::{build_record, put_record};
use crate::utils::time::now_iso;

const DEFAULT_EXAM_TITLE: &str = "Simulado";

pub async fn submit_exam(
    service: &ExamService,
    request: &HttpRequest,
    exam_id: String,
    body: SubmitExamRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let exam = match find_exam_for_submission(storage.as_ref(), &owner_id, &exam_id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => return Ok(not_found(ErrorCode::ExamNotFound, "Exam not found")),
        Err(e) => return Ok(internal_error("Failed to submit exam", e)),
    };

    let Some(questions) = exam.questions.as_deref() else {
        return Ok(bad_request(
            ErrorCode::ExamHasNoQuestions,
            "Exam has no questions",
        ));
    };

    let outcome = score_exam(questions, &body.answers, &body.essay_answers);

    let exam_title = if exam.title.trim().is_empty() {
        DEFAULT_EXAM_TITLE
    } else {
        exam.title.as_str()
    };
    let mut fields = json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "examId": exam.id,
        "examTitle": exam_title,
        "userId": owner_id,
        "answers": body.answers,
        "essayAnswers": body.essay_answers,
        "score": outcome.score,
        "totalQuestions": outcome.total_multiple_choice,
        "totalEssayQuestions": outcome.total_essay,
        "percentage": outcome.percentage,
        "results": outcome.results,
        "submittedAt": now_iso(),
        "gradingStatus": outcome.grading_status,
    });
    if let Some(student_name) = body.student_name {
        fields["studentName"] = json!(student_name);
    }
    if let Some(time_spent) = body.time_spent {
        fields["timeSpent"] = time_spent;
    }

    let submission = match build_record::<Submission>(Map::new(), fields) {
        Ok(submission) => submission,
        Err(e) => return Ok(internal_error("Failed to submit exam", e)),
    };
    if let Err(e) = put_record(storage.as_ref(), &owner_id, &submission).await {
        return Ok(internal_error("Failed to submit exam", e));
    }

    info!(
        "Submission {} saved, score: {}/{}, percentage: {}%",
        submission.id, outcome.score, outcome.total_multiple_choice, outcome.percentage
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(SubmissionResponse { submission })))
}
