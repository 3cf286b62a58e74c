//! 路由测试用的应用状态：内存存储加 Moka 缓存

use actix_web::web;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::errors::{Result, SeiceError};
use crate::cache::object_cache::moka::MokaCacheWrapper;
use crate::models::auth::entities::Account;
use crate::services::auth::signup::create_account;
use crate::storage::Storage;
use crate::storage::memory_storage::MemoryStorage;
use crate::utils::jwt::JwtUtils;

pub struct TestState {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

impl TestState {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(MemoryStorage::new()),
            cache: Arc::new(MokaCacheWrapper::with_settings(1_000, 60)),
        }
    }

    pub fn storage_data(&self) -> web::Data<Arc<dyn Storage>> {
        web::Data::new(self.storage.clone())
    }

    pub fn cache_data(&self) -> web::Data<Arc<dyn ObjectCache>> {
        web::Data::new(self.cache.clone())
    }

    /// 共享同一份数据，但前缀查询总是失败
    pub fn failing_list_storage_data(&self) -> web::Data<Arc<dyn Storage>> {
        let failing: Arc<dyn Storage> = Arc::new(FailingListStorage {
            inner: self.storage.clone(),
        });
        web::Data::new(failing)
    }
}

/// 账号读取正常，前缀查询一律失败
struct FailingListStorage {
    inner: Arc<dyn Storage>,
}

#[async_trait]
impl Storage for FailingListStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        self.inner.delete(key).await
    }

    async fn get_by_prefix(&self, _prefix: &str) -> Result<Vec<Value>> {
        Err(SeiceError::database_operation("prefix scan unavailable"))
    }
}

/// 创建账号并返回 (账号, Authorization 头的值)
pub async fn signed_in(state: &TestState, email: &str) -> (Account, String) {
    let account = create_account(state.storage.as_ref(), "Professor Teste", email, "Quadro2024x")
        .await
        .unwrap();
    let token = JwtUtils::generate_access_token(&account.email, &account.id).unwrap();
    (account, format!("Bearer {token}"))
}

pub async fn bearer(state: &TestState, email: &str) -> String {
    signed_in(state, email).await.1
}
