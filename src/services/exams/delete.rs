use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::internal_error;
use crate::storage::records::{RecordKind, delete_record};

pub async fn delete_exam(
    service: &ExamService,
    request: &HttpRequest,
    exam_id: String,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match delete_record(storage.as_ref(), RecordKind::Exams, &owner_id, &exam_id).await {
        Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Exam deleted"))),
        Err(e) => Ok(internal_error("Failed to delete exam", e)),
    }
}
