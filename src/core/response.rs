//! JSON 响应封装

use axum::http::HeaderMap;
use serde::Serialize;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// `/api/*` 接口统一的响应外壳
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub request_id: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::with_request_id(data, Uuid::new_v4().to_string())
    }

    /// 沿用调用方传入的 `x-request-id`，没有或为空时生成新的
    pub fn for_request(data: T, headers: &HeaderMap) -> Self {
        match headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            Some(id) => Self::with_request_id(data, id.to_string()),
            None => Self::success(data),
        }
    }

    fn with_request_id(data: T, request_id: String) -> Self {
        Self {
            success: true,
            data,
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
