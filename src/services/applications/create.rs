use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::{Value, json};

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::applications::entities::Application;
use crate::models::applications::responses::ApplicationResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, write_error};
use crate::storage::records::{build_record, put_record};
use crate::utils::json::into_object;
use crate::utils::time::now_iso;

pub async fn create_application(
    service: &ApplicationService,
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
        "createdAt": now_iso(),
        "appliedCount": 0,
        "completedCount": 0,
    });
    let application = match build_record::<Application>(body, server_fields) {
        Ok(application) => application,
        Err(e) => return Ok(write_error("Failed to create application", e)),
    };

    let storage = service.get_storage(request);
    if let Err(e) = put_record(storage.as_ref(), &owner_id, &application).await {
        return Ok(write_error("Failed to create application", e));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(ApplicationResponse { application })))
}
