use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::{Map, Value, json};
use tracing::{debug, info};

use super::QuestionService;
use crate::middlewares::RequireJWT;
use crate::models::questions::entities::{DEFAULT_QUESTION_TYPE, Question};
use crate::models::questions::requests::missing_question_fields;
use crate::models::questions::responses::QuestionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, internal_error, write_error};
use crate::storage::records::{build_record, get_record, put_record};
use crate::utils::json::{into_object, is_truthy};
use crate::utils::time::now_iso;

// 只保留题目字段，空值按默认值处理
fn pick_question_fields(body: &Map<String, Value>) -> Map<String, Value> {
    let or_default = |key: &str, default: Value| -> Value {
        body.get(key)
            .filter(|v| is_truthy(v))
            .cloned()
            .unwrap_or(default)
    };

    let mut fields = Map::new();
    for key in ["question", "subject", "difficulty"] {
        if let Some(value) = body.get(key) {
            fields.insert(key.to_string(), value.clone());
        }
    }
    fields.insert("type".into(), or_default("type", json!(DEFAULT_QUESTION_TYPE)));
    fields.insert("options".into(), or_default("options", json!([])));
    fields.insert("correctAnswer".into(), or_default("correctAnswer", json!(0)));
    fields.insert("tags".into(), or_default("tags", json!([])));
    fields.insert("explanation".into(), or_default("explanation", json!("")));
    if let Some(question_type) = body.get("questionType").filter(|v| is_truthy(v)) {
        fields.insert("questionType".into(), question_type.clone());
    }
    fields
}

pub async fn create_question(
    service: &QuestionService,
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

    let missing = missing_question_fields(&body);
    if !missing.is_empty() {
        debug!("Question rejected, missing {:?}", missing);
        return Ok(bad_request(
            ErrorCode::QuestionFieldsMissing,
            "Missing required fields: question, subject, difficulty",
        ));
    }

    let question_id = uuid::Uuid::new_v4().to_string();
    let server_fields = json!({
        "id": question_id,
        "userId": owner_id,
        "createdAt": now_iso(),
        "usageCount": 0,
        "isActive": true,
    });
    let question = match build_record::<Question>(pick_question_fields(&body), server_fields) {
        Ok(question) => question,
        Err(e) => return Ok(write_error("Failed to save question", e)),
    };

    let storage = service.get_storage(request);
    if let Err(e) = put_record(storage.as_ref(), &owner_id, &question).await {
        return Ok(internal_error("Failed to save question", e));
    }

    // 回读确认已持久化
    match get_record::<Question>(storage.as_ref(), &owner_id, &question_id).await {
        Ok(Some(saved)) => {
            info!("Question {} created for {}", question_id, owner_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(QuestionResponse { question: saved })))
        }
        Ok(None) => Ok(internal_error(
            "Failed to persist question data",
            format!("question {question_id} missing after write"),
        )),
        Err(e) => Ok(internal_error("Failed to save question", e)),
    }
}
