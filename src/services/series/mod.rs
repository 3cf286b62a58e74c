//! 年级管理
//!
//! 年级代码在同一用户下唯一（不区分大小写）。有学生的年级不能删除。

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod students;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::models::series::entities::Series;
use crate::models::series::requests::CreateSeriesRequest;
use crate::storage::Storage;

/// 更新时不可覆盖的字段
pub const SERIES_PROTECTED_FIELDS: [&str; 3] = ["id", "createdBy", "createdAt"];

pub struct SeriesService {
    storage: Option<Arc<dyn Storage>>,
}

impl SeriesService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_series(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_series(self, request).await
    }

    pub async fn create_series(
        &self,
        request: &HttpRequest,
        body: CreateSeriesRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_series(self, request, body).await
    }

    pub async fn get_series(
        &self,
        request: &HttpRequest,
        series_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_series(self, request, series_id).await
    }

    pub async fn update_series(
        &self,
        request: &HttpRequest,
        series_id: String,
        patch: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_series(self, request, series_id, patch).await
    }

    pub async fn delete_series(
        &self,
        request: &HttpRequest,
        series_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_series(self, request, series_id).await
    }

    /// 年级下的学生
    pub async fn list_series_students(
        &self,
        request: &HttpRequest,
        series_id: String,
    ) -> ActixResult<HttpResponse> {
        students::list_series_students(self, request, series_id).await
    }
}

/// 代码是否已被其他年级占用，`exclude_id` 用于更新时排除自身
pub fn code_exists(existing: &[Series], code: &str, exclude_id: Option<&str>) -> bool {
    let code = code.to_lowercase();
    existing
        .iter()
        .filter(|series| exclude_id.is_none_or(|id| series.id != id))
        .any(|series| series.code.to_lowercase() == code)
}

/// 按创建时间倒序
pub fn sort_newest_first(series: &mut [Series]) {
    series.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn series(id: &str, code: &str, created_at: &str) -> Series {
        serde_json::from_value(json!({
            "id": id,
            "name": format!("Série {code}"),
            "code": code,
            "createdAt": created_at
        }))
        .unwrap()
    }

    #[test]
    fn test_code_exists_is_case_insensitive() {
        let existing = vec![series("s1", "6A", "2024-01-01T00:00:00.000Z")];
        assert!(code_exists(&existing, "6a", None));
        assert!(code_exists(&existing, "6A", None));
        assert!(!code_exists(&existing, "7A", None));
    }

    #[test]
    fn test_code_exists_excludes_self() {
        let existing = vec![
            series("s1", "6A", "2024-01-01T00:00:00.000Z"),
            series("s2", "7B", "2024-01-02T00:00:00.000Z"),
        ];
        assert!(!code_exists(&existing, "6a", Some("s1")));
        assert!(code_exists(&existing, "7b", Some("s1")));
    }

    #[test]
    fn test_sort_newest_first() {
        let mut list = vec![
            series("old", "1A", "2023-02-01T00:00:00.000Z"),
            series("new", "2A", "2024-03-01T00:00:00.000Z"),
            series("mid", "3A", "2023-12-01T00:00:00.000Z"),
        ];
        sort_newest_first(&mut list);
        let ids: Vec<&str> = list.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }
}
