use serde::Serialize;
use serde_json::Value;

use super::entities::Submission;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionListResponse {
    pub submissions: Vec<Submission>,
    pub count: usize,
    pub graded_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub submission: Submission,
}

/// 导出行，缺失字段以 "N/A" 或 0 填充
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub student_name: String,
    pub exam_title: String,
    pub score: Value,
    pub total_questions: Value,
    pub percentage: Value,
    pub submitted_at: Option<String>,
    pub time_spent: Value,
    pub grading_status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionExport {
    pub format: String,
    pub generated_at: String,
    pub total_submissions: usize,
    pub data: Vec<ExportRow>,
}

#[derive(Debug, Serialize)]
pub struct BulkExportResponse {
    pub export: SubmissionExport,
}
