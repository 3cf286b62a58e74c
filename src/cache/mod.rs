//! 缓存层
//!
//! 以名称注册的对象缓存插件（Moka 进程内缓存 / Redis），
//! 目前用于缓存 Bearer Token 对应的账号信息。

pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明一个对象缓存插件，在程序加载时注册到插件表
///
/// 插件类型需要提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $plugin:ty) => {
        #[ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| -> $crate::cache::register::BoxedObjectCacheFuture {
                    Box::pin(async {
                        let cache = <$plugin>::new()
                            .map_err($crate::errors::SeiceError::cache_connection)?;
                        let boxed: Box<dyn $crate::cache::ObjectCache> = Box::new(cache);
                        Ok::<_, $crate::errors::SeiceError>(boxed)
                    })
                }),
            );
        }
    };
}
