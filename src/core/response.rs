//! 核心响应处理模块
//!
//! 前端直接消费裸 JSON（数组或对象），这里只放几个固定形状的响应体。

use serde::Serialize;

/// 只带一条提示信息的响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 登录成功；失败走 `CoreError::Unauthorized`
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

impl LoginResponse {
    pub fn success() -> Self {
        Self { success: true }
    }
}

/// 健康检查
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
