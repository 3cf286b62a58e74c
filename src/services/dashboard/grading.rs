use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::calc::grading_stats as compute_stats;
use super::{DashboardService, load_or_empty};
use crate::middlewares::RequireJWT;
use crate::models::dashboard::responses::StatsResponse;
use crate::models::submissions::entities::Submission;

pub async fn grading_stats(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let submissions = load_or_empty::<Submission>(storage.as_ref(), &owner_id).await;
    let stats = compute_stats(submissions);
    Ok(HttpResponse::Ok().json(StatsResponse { stats }))
}
