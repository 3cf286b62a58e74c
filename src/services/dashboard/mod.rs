pub mod calc;
pub mod grading;
pub mod overview;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use crate::storage::Storage;
use crate::storage::records::{Record, list_records};

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    /// 首页概览
    pub async fn dashboard_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        overview::dashboard_stats(self, request).await
    }

    /// 评分统计
    pub async fn grading_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        grading::grading_stats(self, request).await
    }
}

// 统计读取失败时按空集合计算
async fn load_or_empty<T: Record>(storage: &dyn Storage, owner_id: &str) -> Vec<T> {
    list_records::<T>(storage, owner_id).await.unwrap_or_else(|e| {
        error!(
            "Failed to load {} for stats of {}: {}",
            T::KIND.as_str(),
            owner_id,
            e
        );
        Vec::new()
    })
}
