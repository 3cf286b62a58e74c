use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::exams::entities::Exam;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, write_error};
use crate::storage::Storage;
use crate::storage::records::{build_record, get_record, merge_record, put_record};
use crate::utils::json::{OWNED_FIELDS, into_object};
use crate::utils::time::now_iso;

pub async fn create_submission(
    service: &SubmissionService,
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

    let server_fields = json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "userId": owner_id,
        "submittedAt": now_iso(),
    });
    let submission = match build_record::<Submission>(body, server_fields) {
        Ok(submission) => submission,
        Err(e) => return Ok(write_error("Failed to save submission", e)),
    };

    let storage = service.get_storage(request);
    if let Err(e) = put_record(storage.as_ref(), &owner_id, &submission).await {
        return Ok(write_error("Failed to save submission", e));
    }

    if let Some(exam_id) = submission.exam_id.as_deref() {
        record_exam_application(storage.as_ref(), &owner_id, exam_id).await;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(SubmissionResponse { submission })))
}

/// 更新评估的应用统计，失败只记录日志，不影响已保存的作答
async fn record_exam_application(storage: &dyn Storage, owner_id: &str, exam_id: &str) {
    let exam = match get_record::<Exam>(storage, owner_id, exam_id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => {
            debug!("Exam {} not owned by {}, skip counters", exam_id, owner_id);
            return;
        }
        Err(e) => {
            warn!("Failed to load exam {} for counters: {}", exam_id, e);
            return;
        }
    };

    let patch = json!({
        "appliedCount": exam.applied_count + 1,
        "studentsCount": exam.students_count + 1,
        "lastApplied": now_iso(),
    });
    let Ok(patch) = into_object(patch) else {
        return;
    };
    if let Err(e) = merge_record::<Exam>(storage, owner_id, exam_id, patch, &OWNED_FIELDS).await {
        warn!("Failed to update counters of exam {}: {}", exam_id, e);
    }
}
