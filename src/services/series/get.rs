use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SeriesService;
use crate::middlewares::RequireJWT;
use crate::models::series::entities::Series;
use crate::models::series::responses::SeriesResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found};
use crate::storage::records::get_record;

pub async fn get_series(
    service: &SeriesService,
    request: &HttpRequest,
    series_id: String,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match get_record::<Series>(storage.as_ref(), &owner_id, &series_id).await {
        Ok(Some(series)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(SeriesResponse::new(series))))
        }
        Ok(None) => Ok(not_found(ErrorCode::SeriesNotFound, "Series not found")),
        Err(e) => Ok(internal_error("Failed to fetch series", e)),
    }
}
