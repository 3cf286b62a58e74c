use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::{Number, Value};
use tracing::{info, warn};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::{GradingStatus, Submission};
use crate::models::submissions::requests::BulkExportRequest;
use crate::models::submissions::responses::{BulkExportResponse, ExportRow, SubmissionExport};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::bad_request;
use crate::storage::records::get_record;
use crate::utils::time::now_iso;

const DEFAULT_EXPORT_FORMAT: &str = "csv";
const NOT_AVAILABLE: &str = "N/A";

fn number_or_zero(value: &Option<Number>) -> Value {
    value
        .as_ref()
        .map(|n| Value::Number(n.clone()))
        .unwrap_or_else(|| Value::from(0))
}

pub fn export_row(submission: &Submission) -> ExportRow {
    ExportRow {
        student_name: submission
            .student_name
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        exam_title: submission
            .exam_title
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        score: number_or_zero(&submission.score),
        total_questions: number_or_zero(&submission.total_questions),
        percentage: number_or_zero(&submission.percentage),
        submitted_at: submission.submitted_at.clone(),
        time_spent: submission.time_spent.clone().unwrap_or_else(|| Value::from(0)),
        grading_status: submission
            .grading_status
            .clone()
            .unwrap_or_else(|| GradingStatus::Pending.as_str().to_string()),
    }
}

pub async fn bulk_export(
    service: &SubmissionService,
    request: &HttpRequest,
    body: BulkExportRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let Some(ids) = body.ids() else {
        return Ok(bad_request(
            ErrorCode::SubmissionIdsMissing,
            "Submission IDs required",
        ));
    };
    let storage = service.get_storage(request);

    // 不存在或读取失败的 ID 直接跳过
    let mut rows = Vec::with_capacity(ids.len());
    for id in &ids {
        match get_record::<Submission>(storage.as_ref(), &owner_id, id).await {
            Ok(Some(submission)) => rows.push(export_row(&submission)),
            Ok(None) => {}
            Err(e) => warn!("Skip submission {} in export: {}", id, e),
        }
    }

    info!("Exported {}/{} submissions", rows.len(), ids.len());
    let export = SubmissionExport {
        format: body
            .format
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_EXPORT_FORMAT.to_string()),
        generated_at: now_iso(),
        total_submissions: rows.len(),
        data: rows,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(BulkExportResponse { export })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_export_row_fills_missing_fields() {
        let submission: Submission = serde_json::from_value(json!({"id": "s1"})).unwrap();
        let row = export_row(&submission);
        assert_eq!(row.student_name, "N/A");
        assert_eq!(row.exam_title, "N/A");
        assert_eq!(row.score, json!(0));
        assert_eq!(row.grading_status, "pending");
    }

    #[test]
    fn test_export_row_keeps_values() {
        let submission: Submission = serde_json::from_value(json!({
            "id": "s2",
            "studentName": "Maria",
            "examTitle": "Simulado ENEM",
            "score": 8,
            "totalQuestions": 10,
            "percentage": 80,
            "timeSpent": 45,
            "gradingStatus": "graded"
        }))
        .unwrap();
        let row = export_row(&submission);
        assert_eq!(row.student_name, "Maria");
        assert_eq!(row.percentage, json!(80));
        assert_eq!(row.time_spent, json!(45));
        assert_eq!(row.grading_status, "graded");
    }
}
