use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::students::entities::Student;
use crate::models::students::responses::StudentListResponse;
use crate::storage::records::list_records;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    // 读取失败时返回空列表
    let students = list_records::<Student>(storage.as_ref(), &owner_id)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to list students for {}: {}", owner_id, e);
            Vec::new()
        });

    Ok(HttpResponse::Ok().json(ApiResponse::success(StudentListResponse {
        count: students.len(),
        students,
    })))
}
