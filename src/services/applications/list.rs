use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::applications::entities::Application;
use crate::models::applications::responses::ApplicationListResponse;
use crate::storage::records::list_records;

pub async fn list_applications(
    service: &ApplicationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let applications = list_records::<Application>(storage.as_ref(), &owner_id)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to list applications for {}: {}", owner_id, e);
            Vec::new()
        });

    Ok(HttpResponse::Ok().json(ApiResponse::success(ApplicationListResponse {
        applications,
    })))
}
