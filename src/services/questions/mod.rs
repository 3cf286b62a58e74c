pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::storage::Storage;

pub struct QuestionService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuestionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_questions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_questions(self, request).await
    }

    pub async fn create_question(
        &self,
        request: &HttpRequest,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        create::create_question(self, request, body).await
    }

    pub async fn update_question(
        &self,
        request: &HttpRequest,
        question_id: String,
        patch: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_question(self, request, question_id, patch).await
    }

    pub async fn delete_question(
        &self,
        request: &HttpRequest,
        question_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_question(self, request, question_id).await
    }
}
