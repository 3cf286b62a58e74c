pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::storage::Storage;

pub struct ApplicationService {
    storage: Option<Arc<dyn Storage>>,
}

impl ApplicationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_applications(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_applications(self, request).await
    }

    pub async fn create_application(
        &self,
        request: &HttpRequest,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        create::create_application(self, request, body).await
    }

    pub async fn update_application(
        &self,
        request: &HttpRequest,
        application_id: String,
        patch: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_application(self, request, application_id, patch).await
    }

    pub async fn delete_application(
        &self,
        request: &HttpRequest,
        application_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_application(self, request, application_id).await
    }
}
