//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_seice_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SeiceError {
            $($variant(String),)*
        }

        impl SeiceError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SeiceError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SeiceError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SeiceError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SeiceError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SeiceError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_seice_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    Authentication("E009", "Authentication Error"),
}

impl SeiceError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SeiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SeiceError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SeiceError {
    fn from(err: sea_orm::DbErr) -> Self {
        SeiceError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SeiceError {
    fn from(err: serde_json::Error) -> Self {
        SeiceError::Serialization(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for SeiceError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        SeiceError::Authentication(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SeiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SeiceError::cache_connection("test").code(), "E001");
        assert_eq!(SeiceError::database_config("test").code(), "E003");
        assert_eq!(SeiceError::validation("test").code(), "E006");
        assert_eq!(SeiceError::serialization("test").code(), "E008");
        assert_eq!(SeiceError::authentication("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SeiceError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            SeiceError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SeiceError::not_found("exam EVAL123456");
        assert_eq!(err.message(), "exam EVAL123456");
    }

    #[test]
    fn test_from_serde_json_error() {
        let raw = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SeiceError = raw.into();
        assert_eq!(err.error_type(), "Serialization Error");
    }

    #[test]
    fn test_format_simple() {
        let err = SeiceError::validation("Series code is required");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Series code is required"));
    }
}
