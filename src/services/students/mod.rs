pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::models::students::requests::CreateStudentsRequest;
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_students(self, request).await
    }

    // 批量导入学生
    pub async fn create_students(
        &self,
        request: &HttpRequest,
        body: CreateStudentsRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_students(self, request, body).await
    }

    pub async fn update_student(
        &self,
        request: &HttpRequest,
        student_id: String,
        patch: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, request, student_id, patch).await
    }

    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        student_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, student_id).await
    }
}
