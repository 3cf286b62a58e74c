use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::errors::{Result, SeiceError};
use crate::services::auth::seed::seed_default_account;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

const FALLBACK_CACHE: &str = "moka";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

async fn try_cache_plugin(name: &str) -> Result<Arc<dyn ObjectCache>> {
    let constructor = get_object_cache_plugin(name).ok_or_else(|| {
        SeiceError::cache_plugin_not_found(format!("Cache backend '{name}' not found in registry"))
    })?;
    let cache = constructor().await?;
    Ok(Arc::from(cache))
}

/// 创建缓存实例，配置的后端不可用时回退到 Moka
async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache_type = &AppConfig::get().cache.cache_type;
    warn!("Attempting to create {} cache backend", cache_type);

    match try_cache_plugin(cache_type).await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", cache_type);
            return Ok(cache);
        }
        Err(e) if cache_type.as_str() != FALLBACK_CACHE => {
            warn!("Failed to create {} cache: {}", cache_type, e);
        }
        Err(e) => return Err(e),
    }

    warn!("Falling back to memory cache");
    let cache = try_cache_plugin(FALLBACK_CACHE).await?;
    warn!("Successfully created fallback Moka (in-memory) cache backend");
    Ok(cache)
}

/// 准备服务器启动的上下文：存储（含迁移）、默认账号和缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // redis 和 sqlx 的 TLS 连接共用进程级 provider，重复安装时忽略
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    match seed_default_account(storage.as_ref()).await {
        Ok(true) => warn!("No accounts found, default account created"),
        Ok(false) => debug!("Accounts already exist, skipping default account"),
        Err(e) => warn!("Failed to seed default account: {}", e),
    }

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}
