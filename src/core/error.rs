//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::store::{StoreError, CHAT_MESSAGES, PROPERTIES, USERS};

pub const LOGIN_FAILED_MESSAGE: &str = "密码错误";

/// 核心错误类型
#[derive(Debug, PartialEq, Eq)]
pub enum CoreError {
    BadRequest(String),
    Unauthorized,
    NotFound(String),
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),
            CoreError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "message": LOGIN_FAILED_MESSAGE }),
            ),
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { collection, .. } => {
                let message = match collection {
                    PROPERTIES => "房源不存在",
                    USERS => "用户不存在",
                    CHAT_MESSAGES => "消息不存在",
                    _ => "记录不存在",
                };
                CoreError::NotFound(message.to_string())
            }
        }
    }
}
