//! 用户处理器

use axum::{extract::State, http::StatusCode, response::Json};

use super::model::{CreateUserRequest, PlatformAuthRequest, User};
use crate::app::AppState;
use crate::core::extract::JsonBody;

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.list_users().await)
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> (StatusCode, Json<User>) {
    let user = state.user_service.create_user(req).await;
    (StatusCode::CREATED, Json(user))
}

/// 全局实名认证，不关联具体房源
pub async fn platform_auth(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<PlatformAuthRequest>,
) -> (StatusCode, Json<User>) {
    let user = state.user_service.create_user(req.into()).await;
    (StatusCode::CREATED, Json(user))
}
