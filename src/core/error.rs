//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 核心错误类型（面向 HTTP 的错误）
#[derive(Debug)]
pub enum CoreError {
    NotFound(String),
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error_message, user_message) = match self {
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            CoreError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                msg,
            ),
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

impl From<crate::app::employee::view::ViewError> for CoreError {
    fn from(err: crate::app::employee::view::ViewError) -> Self {
        CoreError::InternalServerError(err.to_string())
    }
}

/// 员工 REST 后端调用错误
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_maps_to_404_json() {
        let response = CoreError::NotFound("Employee 9 is not listed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "NOT_FOUND");
        assert_eq!(value["code"], 404);
        assert_eq!(value["message"], "Employee 9 is not listed");
    }
}
