pub mod bulk_export;
pub mod create;
pub mod list;
pub mod review;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::models::submissions::requests::{BulkExportRequest, ReviewSubmissionRequest};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_submissions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request).await
    }

    /// 手动录入作答
    pub async fn create_submission(
        &self,
        request: &HttpRequest,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        create::create_submission(self, request, body).await
    }

    /// 人工批改
    pub async fn review_submission(
        &self,
        request: &HttpRequest,
        submission_id: String,
        body: ReviewSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        review::review_submission(self, request, submission_id, body).await
    }

    pub async fn bulk_export(
        &self,
        request: &HttpRequest,
        body: BulkExportRequest,
    ) -> ActixResult<HttpResponse> {
        bulk_export::bulk_export(self, request, body).await
    }
}
