use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::{Value, json};
use tracing::info;

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::students::entities::{STUDENT_ACTIVE, Student};
use crate::models::students::requests::CreateStudentsRequest;
use crate::models::students::responses::StudentsCreatedResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, internal_error};
use crate::storage::records::{build_record, put_record};
use crate::utils::time::now_iso;

pub async fn create_students(
    service: &StudentService,
    request: &HttpRequest,
    body: CreateStudentsRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    let Value::Array(rows) = body.students else {
        return Ok(bad_request(
            ErrorCode::StudentListInvalid,
            "Students must be an array",
        ));
    };

    // 先整体校验，避免导入一半失败
    let now = now_iso();
    let mut students = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let Value::Object(fields) = row else {
            return Ok(bad_request(
                ErrorCode::StudentListInvalid,
                format!("Student #{} must be an object", index + 1),
            ));
        };
        let server_fields = json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "userId": owner_id,
            "createdAt": now,
            "status": STUDENT_ACTIVE,
        });
        match build_record::<Student>(fields, server_fields) {
            Ok(student) => students.push(student),
            Err(e) => {
                return Ok(bad_request(
                    ErrorCode::StudentListInvalid,
                    format!("Student #{}: {}", index + 1, e.message()),
                ));
            }
        }
    }

    let storage = service.get_storage(request);
    for student in &students {
        if let Err(e) = put_record(storage.as_ref(), &owner_id, student).await {
            return Ok(internal_error("Failed to save students", e));
        }
    }

    info!("Imported {} students for {}", students.len(), owner_id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(StudentsCreatedResponse { students })))
}
