use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::internal_error;
use crate::storage::records::{RecordKind, delete_record};

pub async fn delete_application(
    service: &ApplicationService,
    request: &HttpRequest,
    application_id: String,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match delete_record(storage.as_ref(), RecordKind::Applications, &owner_id, &application_id).await {
        Ok(existed) => {
            debug!("Delete application {} (existed: {})", application_id, existed);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Application deleted")))
        }
        Err(e) => Ok(internal_error("Failed to delete application", e)),
    }
}
