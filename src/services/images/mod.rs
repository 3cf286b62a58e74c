pub mod create;
pub mod list;
pub mod processing;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::storage::Storage;

pub struct ImageService {
    storage: Option<Arc<dyn Storage>>,
}

impl ImageService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_images(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_images(self, request).await
    }

    /// 登记答题卡图片并启动后台识别
    pub async fn create_image(&self, request: &HttpRequest, body: Value) -> ActixResult<HttpResponse> {
        create::create_image(self, request, body).await
    }
}
