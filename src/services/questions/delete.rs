use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::internal_error;
use crate::storage::records::{RecordKind, delete_record};

pub async fn delete_question(
    service: &QuestionService,
    request: &HttpRequest,
    question_id: String,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match delete_record(storage.as_ref(), RecordKind::Questions, &owner_id, &question_id).await {
        Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Question deleted"))),
        Err(e) => Ok(internal_error("Failed to delete question", e)),
    }
}
