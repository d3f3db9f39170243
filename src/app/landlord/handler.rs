//! 房东处理器

use axum::{extract::State, response::Json};

use super::model::{LandlordConfig, LandlordConfigPatch, LoginRequest};
use crate::app::AppState;
use crate::core::{error::CoreError, extract::JsonBody, response::LoginResponse};

/// 返回的配置不含密码（序列化时跳过）
pub async fn get_config(State(state): State<AppState>) -> Json<LandlordConfig> {
    Json(state.landlord_service.get_config().await)
}

pub async fn update_config(
    State(state): State<AppState>,
    JsonBody(patch): JsonBody<LandlordConfigPatch>,
) -> Json<LandlordConfig> {
    Json(state.landlord_service.update_config(patch).await)
}

pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, CoreError> {
    state.landlord_service.login(req.password.as_deref()).await?;
    Ok(Json(LoginResponse::success()))
}
