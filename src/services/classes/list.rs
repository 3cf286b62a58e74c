use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::classes::entities::Class;
use crate::models::classes::responses::ClassListResponse;
use crate::storage::records::list_records;

pub async fn list_classes(service: &ClassService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let classes = list_records::<Class>(storage.as_ref(), &owner_id)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to list classes for {}: {}", owner_id, e);
            Vec::new()
        });

    Ok(HttpResponse::Ok().json(ApiResponse::success(ClassListResponse { classes })))
}
