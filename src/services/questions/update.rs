use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;

use super::QuestionService;
use crate::middlewares::RequireJWT;
use crate::models::questions::entities::Question;
use crate::models::questions::responses::QuestionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, not_found, write_error};
use crate::storage::records::merge_record;
use crate::utils::json::{OWNED_FIELDS, into_object};

pub async fn update_question(
    service: &QuestionService,
    request: &HttpRequest,
    question_id: String,
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
    match merge_record::<Question>(storage.as_ref(), &owner_id, &question_id, patch, &OWNED_FIELDS)
        .await
    {
        Ok(Some(question)) => Ok(HttpResponse::Ok().json(ApiResponse::success(QuestionResponse {
            question,
        }))),
        Ok(None) => Ok(not_found(ErrorCode::QuestionNotFound, "Question not found")),
        Err(e) => Ok(write_error("Failed to update question", e)),
    }
}
