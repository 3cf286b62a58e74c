use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::{ExamService, find_exam_any_owner};
use crate::models::exams::responses::{PublicExam, PublicExamResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, internal_error, not_found};

pub async fn get_public_exam(
    service: &ExamService,
    request: &HttpRequest,
    exam_id: String,
    session: Option<String>,
) -> ActixResult<HttpResponse> {
    let Some(session_id) = session.filter(|s| !s.is_empty()) else {
        return Ok(bad_request(ErrorCode::ExamSessionMissing, "Session ID required"));
    };

    let storage = service.get_storage(request);
    let exam = match find_exam_any_owner(storage.as_ref(), &exam_id).await {
        Ok(Some(exam)) if exam.is_active() => exam,
        Ok(_) => {
            debug!("Public exam {} not found or not active", exam_id);
            return Ok(not_found(
                ErrorCode::ExamNotActive,
                "Exam not found or not active",
            ));
        }
        Err(e) => return Ok(internal_error("Failed to fetch exam", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(PublicExamResponse {
        exam: PublicExam::from(exam),
        session_id,
    })))
}
