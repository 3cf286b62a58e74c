use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SeriesService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::series::responses::SeriesStudentsResponse;
use crate::models::students::entities::Student;
use crate::storage::records::list_records;

pub async fn list_series_students(
    service: &SeriesService,
    request: &HttpRequest,
    series_id: String,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let students: Vec<Student> = list_records::<Student>(storage.as_ref(), &owner_id)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to list students of series {}: {}", series_id, e);
            Vec::new()
        })
        .into_iter()
        .filter(|student| student.serie_id.as_deref() == Some(series_id.as_str()))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(SeriesStudentsResponse::new(students))))
}
