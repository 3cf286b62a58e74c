use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::{Map, Value, json};
use tracing::info;

use super::{SeriesService, code_exists};
use crate::middlewares::RequireJWT;
use crate::models::series::entities::{DEFAULT_LEVEL, Series};
use crate::models::series::requests::CreateSeriesRequest;
use crate::models::series::responses::SeriesResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, internal_error, write_error};
use crate::storage::records::{build_record, list_records, put_record};
use crate::utils::json::{is_truthy, parse_int_like};
use crate::utils::time::{current_year, now_iso};

const DEFAULT_GRADE: i64 = 1;

/// 规范化请求字段，生成待存储的年级 JSON
pub fn series_fields(
    body: CreateSeriesRequest,
    id: &str,
    owner_id: &str,
    now: &str,
) -> Option<Value> {
    let name = body.name.as_deref().map(str::trim).unwrap_or_default();
    let code = body.code.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() || code.is_empty() {
        return None;
    }

    let grade = body
        .grade
        .as_ref()
        .and_then(parse_int_like)
        .filter(|g| *g != 0)
        .unwrap_or(DEFAULT_GRADE);
    let academic_year = body
        .academic_year
        .filter(is_truthy)
        .unwrap_or_else(|| Value::String(current_year()));

    let mut fields = json!({
        "id": id,
        "name": name,
        "code": code.to_uppercase(),
        "description": body.description.as_deref().map(str::trim).unwrap_or_default(),
        "level": body.level.filter(|l| !l.is_empty()).unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
        "grade": grade,
        "isActive": body.is_active.unwrap_or(true),
        "studentCount": 0,
        "academicYear": academic_year,
        "createdBy": owner_id,
        "createdAt": now,
        "updatedAt": now,
    });
    if let Some(max_students) = body
        .max_students
        .filter(is_truthy)
        .as_ref()
        .and_then(parse_int_like)
    {
        fields["maxStudents"] = json!(max_students);
    }
    Some(fields)
}

pub async fn create_series(
    service: &SeriesService,
    request: &HttpRequest,
    body: CreateSeriesRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let code = body.code.as_deref().map(str::trim).unwrap_or_default().to_string();
    let id = uuid::Uuid::new_v4().to_string();
    let Some(fields) = series_fields(body, &id, &owner_id, &now_iso()) else {
        return Ok(bad_request(
            ErrorCode::SeriesFieldsMissing,
            "Name and code are required",
        ));
    };

    let existing = match list_records::<Series>(storage.as_ref(), &owner_id).await {
        Ok(existing) => existing,
        Err(e) => return Ok(internal_error("Failed to create series", e)),
    };
    if code_exists(&existing, &code, None) {
        return Ok(bad_request(
            ErrorCode::SeriesCodeExists,
            "Code already exists, choose another code",
        ));
    }

    let series = match build_record::<Series>(Map::new(), fields) {
        Ok(series) => series,
        Err(e) => return Ok(write_error("Failed to create series", e)),
    };
    if let Err(e) = put_record(storage.as_ref(), &owner_id, &series).await {
        return Ok(internal_error("Failed to create series", e));
    }

    info!("Series {} ({}) created by {}", series.id, series.code, owner_id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(SeriesResponse::new(series))))
}
