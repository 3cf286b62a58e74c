use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::QuestionService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::questions::entities::Question;
use crate::models::questions::responses::QuestionListResponse;
use crate::storage::records::list_records;

pub async fn list_questions(
    service: &QuestionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let questions = list_records::<Question>(storage.as_ref(), &owner_id)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to list questions for {}: {}", owner_id, e);
            Vec::new()
        });

    Ok(HttpResponse::Ok().json(ApiResponse::success(QuestionListResponse {
        count: questions.len(),
        questions,
    })))
}
