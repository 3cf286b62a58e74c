use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::{Map, Value};
use tracing::info;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::{GradingStatus, Submission};
use crate::models::submissions::requests::ReviewSubmissionRequest;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, write_error};
use crate::storage::records::merge_record;
use crate::utils::json::OWNED_FIELDS;
use crate::utils::time::now_iso;

fn review_patch(body: ReviewSubmissionRequest, reviewer_id: &str) -> Map<String, Value> {
    let mut patch = Map::new();
    if let Some(notes) = body.review_notes {
        patch.insert("reviewNotes".into(), notes);
    }
    if let Some(feedback) = body.feedback {
        patch.insert("feedback".into(), feedback);
    }
    patch.insert(
        "gradingStatus".into(),
        Value::String(GradingStatus::Reviewed.as_str().into()),
    );
    patch.insert("reviewedAt".into(), Value::String(now_iso()));
    patch.insert("reviewedBy".into(), Value::String(reviewer_id.into()));
    patch
}

pub async fn review_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: String,
    body: ReviewSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let patch = review_patch(body, &owner_id);
    match merge_record::<Submission>(storage.as_ref(), &owner_id, &submission_id, patch, &OWNED_FIELDS)
        .await
    {
        Ok(Some(submission)) => {
            info!("Submission {} reviewed by {}", submission_id, owner_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(SubmissionResponse { submission })))
        }
        Ok(None) => Ok(not_found(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        )),
        Err(e) => Ok(write_error("Failed to review submission", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_review_patch_marks_reviewed() {
        let body = ReviewSubmissionRequest {
            review_notes: Some(json!("Boa argumentação")),
            feedback: None,
        };
        let patch = review_patch(body, "u1");
        assert_eq!(patch["gradingStatus"], "reviewed");
        assert_eq!(patch["reviewedBy"], "u1");
        assert_eq!(patch["reviewNotes"], "Boa argumentação");
        assert!(!patch.contains_key("feedback"));
        assert!(patch.contains_key("reviewedAt"));
    }
}
