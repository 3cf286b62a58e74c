use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::{Value, json};
use std::time::Duration;

use super::ImageService;
use super::processing::spawn_processing;
use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::models::images::entities::{ImageStatus, ScannedImage};
use crate::models::images::responses::ImageResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, write_error};
use crate::storage::records::{build_record, put_record};
use crate::utils::json::into_object;
use crate::utils::time::now_iso;

pub async fn create_image(
    service: &ImageService,
    request: &HttpRequest,
    body: Value,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let body = match into_object(body) {
        Ok(body) => body,
        Err(e) => return Ok(bad_request(ErrorCode::BadRequest, e.message())),
    };

    let server_fields = json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "userId": owner_id,
        "uploadedAt": now_iso(),
        "status": ImageStatus::Processando,
    });
    let image = match build_record::<ScannedImage>(body, server_fields) {
        Ok(image) => image,
        Err(e) => return Ok(write_error("Failed to save image", e)),
    };

    let storage = service.get_storage(request);
    if let Err(e) = put_record(storage.as_ref(), &owner_id, &image).await {
        return Ok(write_error("Failed to save image", e));
    }

    let delay = Duration::from_millis(AppConfig::get().images.processing_delay_ms);
    spawn_processing(storage, owner_id, image.clone(), delay);

    Ok(HttpResponse::Ok().json(ApiResponse::success(ImageResponse { image })))
}
