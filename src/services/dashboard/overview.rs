use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::calc::dashboard_stats as compute_stats;
use super::{DashboardService, load_or_empty};
use crate::middlewares::RequireJWT;
use crate::models::dashboard::responses::StatsResponse;
use crate::models::exams::entities::Exam;
use crate::models::students::entities::Student;
use crate::models::submissions::entities::Submission;

pub async fn dashboard_stats(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let (students, exams, submissions) = futures_util::join!(
        load_or_empty::<Student>(storage.as_ref(), &owner_id),
        load_or_empty::<Exam>(storage.as_ref(), &owner_id),
        load_or_empty::<Submission>(storage.as_ref(), &owner_id),
    );

    let stats = compute_stats(&students, &exams, &submissions);
    Ok(HttpResponse::Ok().json(StatsResponse { stats }))
}
