use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ImageService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::images::entities::ScannedImage;
use crate::models::images::responses::ImageListResponse;
use crate::storage::records::list_records;

pub async fn list_images(service: &ImageService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let images = list_records::<ScannedImage>(storage.as_ref(), &owner_id)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to list images for {}: {}", owner_id, e);
            Vec::new()
        });

    Ok(HttpResponse::Ok().json(ApiResponse::success(ImageListResponse { images })))
}
