pub mod applications;
pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod exams;
pub mod images;
pub mod questions;
pub mod series;
pub mod students;
pub mod submissions;

pub use applications::ApplicationService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use dashboard::DashboardService;
pub use exams::ExamService;
pub use images::ImageService;
pub use questions::QuestionService;
pub use series::SeriesService;
pub use students::StudentService;
pub use submissions::SubmissionService;

use actix_web::{HttpRequest, HttpResponse};
use std::fmt::Display;
use std::sync::Arc;
use tracing::error;

use crate::errors::SeiceError;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

// 各服务共用：从 app data 中取存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

/// 记录错误详情，对外只返回概要信息
pub(crate) fn internal_error(context: &str, err: impl Display) -> HttpResponse {
    error!("{}: {}", context, err);
    HttpResponse::InternalServerError()
        .json(ApiResponse::error_empty(ErrorCode::InternalServerError, context))
}

/// 写操作的错误映射：校验错误为 400，其余为 500
pub(crate) fn write_error(context: &str, err: SeiceError) -> HttpResponse {
    match err {
        SeiceError::Validation(msg) => bad_request(ErrorCode::ValidationFailed, msg),
        other => internal_error(context, other),
    }
}
