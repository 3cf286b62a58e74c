use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ExamService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::exams::entities::Exam;
use crate::models::exams::responses::ExamListResponse;
use crate::storage::records::list_records;

pub async fn list_exams(service: &ExamService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let exams = list_records::<Exam>(storage.as_ref(), &owner_id)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to list exams for {}: {}", owner_id, e);
            Vec::new()
        });

    let active_count = exams.iter().filter(|exam| exam.is_active()).count();
    Ok(HttpResponse::Ok().json(ApiResponse::success(ExamListResponse {
        count: exams.len(),
        active_count,
        exams,
    })))
}
