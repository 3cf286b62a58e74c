use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::submissions::entities::{GradingStatus, Submission};
use crate::models::submissions::responses::SubmissionListResponse;
use crate::storage::records::list_records;

pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let submissions = list_records::<Submission>(storage.as_ref(), &owner_id)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to list submissions for {}: {}", owner_id, e);
            Vec::new()
        });
    let graded_count = submissions
        .iter()
        .filter(|s| s.has_status(GradingStatus::Graded))
        .count();

    Ok(HttpResponse::Ok().json(ApiResponse::success(SubmissionListResponse {
        count: submissions.len(),
        graded_count,
        submissions,
    })))
}
