use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::config::AppConfig;
use crate::errors::Result;

pub mod memory_storage;
pub mod records;
pub mod sea_orm_storage;

/// 键值存储门面
///
/// 所有业务记录都通过这四个操作读写，键的格式见 [`records::RecordKind::key`]。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    // 读取单个键
    async fn get(&self, key: &str) -> Result<Option<Value>>;
    // 写入（存在则覆盖）
    async fn set(&self, key: &str, value: Value) -> Result<()>;
    // 删除，返回键是否存在
    async fn delete(&self, key: &str) -> Result<bool>;
    // 按前缀列出所有值，按键排序
    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();
    if config.uses_memory_storage() {
        info!("使用内存存储，进程退出后数据将丢失");
        return Ok(Arc::new(memory_storage::MemoryStorage::new()));
    }

    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
