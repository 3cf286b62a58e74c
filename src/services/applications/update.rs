use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::applications::entities::Application;
use crate::models::applications::responses::ApplicationResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, not_found, write_error};
use crate::storage::records::merge_record;
use crate::utils::json::{OWNED_FIELDS, into_object};

pub async fn update_application(
    service: &ApplicationService,
    request: &HttpRequest,
    application_id: String,
    patch: Value,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let patch = match into_object(patch) {
        Ok(patch) => patch,
        Err(e) => return Ok(bad_request(ErrorCode::BadRequest, e.message())),
    };

    let storage = service.get_storage(request);
    match merge_record::<Application>(
        storage.as_ref(),
        &owner_id,
        &application_id,
        patch,
        &OWNED_FIELDS,
    )
    .await
    {
        Ok(Some(application)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(ApplicationResponse { application }))),
        Ok(None) => Ok(not_found(
            ErrorCode::ApplicationNotFound,
            "Application not found",
        )),
        Err(e) => Ok(write_error("Failed to update application", e)),
    }
}
