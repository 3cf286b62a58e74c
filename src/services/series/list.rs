use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{SeriesService, sort_newest_first};
use crate::middlewares::RequireJWT;
use crate::models::series::entities::Series;
use crate::models::series::responses::SeriesListResponse;
use crate::models::ApiResponse;
use crate::storage::records::list_records;

pub async fn list_series(service: &SeriesService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let mut series = list_records::<Series>(storage.as_ref(), &owner_id)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to list series for {}: {}", owner_id, e);
            Vec::new()
        });
    sort_newest_first(&mut series);

    Ok(HttpResponse::Ok().json(ApiResponse::success(SeriesListResponse::new(series))))
}
