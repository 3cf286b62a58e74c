use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::{Map, Value, json};
use tracing::info;

use super::ExamService;
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::exams::entities::{EXAM_DRAFT, Exam};
use crate::models::exams::responses::ExamResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, write_error};
use crate::storage::Storage;
use crate::storage::records::{build_record, put_record};
use crate::utils::json::into_object;
use crate::utils::time::{new_exam_id, now_iso};

/// 以请求体加上服务端默认字段创建评估并保存
pub async fn store_new_exam(
    storage: &dyn Storage,
    owner_id: &str,
    body: Map<String, Value>,
) -> Result<Exam> {
    let server_fields = json!({
        "id": new_exam_id(),
        "userId": owner_id,
        "createdAt": now_iso(),
        "appliedCount": 0,
        "studentsCount": 0,
        "averageScore": 0,
        "status": EXAM_DRAFT,
    });
    let exam = build_record::<Exam>(body, server_fields)?;
    put_record(storage, owner_id, &exam).await?;
    Ok(exam)
}

pub async fn create_exam(
    service: &ExamService,
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
    if body.get("title").and_then(Value::as_str).is_none_or(|t| t.trim().is_empty()) {
        return Ok(bad_request(ErrorCode::ValidationFailed, "Exam title is required"));
    }

    let storage = service.get_storage(request);
    match store_new_exam(storage.as_ref(), &owner_id, body).await {
        Ok(exam) => {
            info!("Exam {} created for {}", exam.id, owner_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(ExamResponse { exam })))
        }
        Err(e) => Ok(write_error("Failed to save exam", e)),
    }
}
