use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::internal_error;
use crate::storage::records::{RecordKind, delete_record};

// 删除是幂等的，记录不存在也返回成功
pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: String,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match delete_record(storage.as_ref(), RecordKind::Students, &owner_id, &student_id).await {
        Ok(existed) => {
            debug!("Delete student {} (existed: {})", student_id, existed);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted")))
        }
        Err(e) => Ok(internal_error("Failed to delete student", e)),
    }
}
