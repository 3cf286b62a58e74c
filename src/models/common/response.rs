use serde::Serialize;

use crate::models::ErrorCode;

/// 统一的 API 响应结构
///
/// 成功时负载字段直接平铺在顶层：`{ "success": true, "students": [...], "count": 3 }`；
/// 失败时为 `{ "success": false, "error": "...", "code": 3000 }`。
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            error: None,
            code: None,
            message: None,
            data: Some(data),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            code: Some(code as i32),
            message: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            error: None,
            code: None,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            code: Some(code as i32),
            message: None,
            data: None,
        }
    }
}

/// 以 `data` 字段包裹负载，年级接口使用这种形式
#[derive(Debug, Clone, Serialize)]
pub struct DataPayload<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataPayload<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        count: usize,
    }

    #[test]
    fn test_success_flattens_payload() {
        let value = serde_json::to_value(ApiResponse::success(Payload { count: 2 })).unwrap();
        assert_eq!(value, json!({"success": true, "count": 2}));
    }

    #[test]
    fn test_error_envelope() {
        let value = serde_json::to_value(ApiResponse::error_empty(
            ErrorCode::SeriesNotFound,
            "Série não encontrada",
        ))
        .unwrap();
        assert_eq!(
            value,
            json!({"success": false, "error": "Série não encontrada", "code": 3500})
        );
    }
}
