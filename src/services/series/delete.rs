use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SeriesService;
use crate::middlewares::RequireJWT;
use crate::models::series::entities::Series;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, internal_error, not_found};
use crate::storage::records::{RecordKind, delete_record, get_record};

pub async fn delete_series(
    service: &SeriesService,
    request: &HttpRequest,
    series_id: String,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let series = match get_record::<Series>(storage.as_ref(), &owner_id, &series_id).await {
        Ok(Some(series)) => series,
        Ok(None) => return Ok(not_found(ErrorCode::SeriesNotFound, "Series not found")),
        Err(e) => return Ok(internal_error("Failed to delete series", e)),
    };

    if series.has_students() {
        return Ok(bad_request(
            ErrorCode::SeriesHasStudents,
            "Cannot delete a series that has students",
        ));
    }

    match delete_record(storage.as_ref(), RecordKind::Series, &owner_id, &series_id).await {
        Ok(_) => {
            info!("Series {} deleted by {}", series_id, owner_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Series deleted")))
        }
        Err(e) => Ok(internal_error("Failed to delete series", e)),
    }
}
