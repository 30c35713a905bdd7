use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// 请求级错误类型
///
/// 所有错误都只终止当前请求，不会影响进程本身。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 缺失/空的公交编号，或者无法解析的请求体
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    RequestTimeout(String),

    #[error("{0}")]
    InternalServerErrorWithContext(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::RequestTimeout(_) => StatusCode::REQUEST_TIMEOUT,
            AppError::InternalServerErrorWithContext(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 稳定的错误码，供前端区分错误类型
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "INVALID_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
            AppError::RequestTimeout(_) => "TIMEOUT",
            AppError::InternalServerErrorWithContext(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::InternalServerErrorWithContext(msg) => {
                tracing::error!("🔴 内部服务器错误: {}", msg);
            }
            other => {
                tracing::debug!("请求失败 [{}]: {}", other.code(), other);
            }
        }

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            },
            "success": false
        }));

        (status, body).into_response()
    }
}
