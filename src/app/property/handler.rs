//! 房源处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::{CreatePropertyRequest, Property, PropertyPatch};
use crate::app::AppState;
use crate::core::{error::CoreError, extract::JsonBody, response::MessageResponse};

pub async fn list_properties(State(state): State<AppState>) -> Json<Vec<Property>> {
    Json(state.property_service.list_properties().await)
}

pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, CoreError> {
    let property = state.property_service.get_property(&id).await?;
    Ok(Json(property))
}

/// `/api/properties/` 没有 id，任何房源都匹配不上
pub async fn missing_property_id() -> CoreError {
    CoreError::NotFound("房源不存在".to_string())
}

pub async fn create_property(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreatePropertyRequest>,
) -> (StatusCode, Json<Property>) {
    let property = state.property_service.create_property(req).await;
    (StatusCode::CREATED, Json(property))
}

pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<PropertyPatch>,
) -> Result<Json<Property>, CoreError> {
    let property = state.property_service.update_property(&id, patch).await?;
    Ok(Json(property))
}

pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, CoreError> {
    state.property_service.delete_property(&id).await?;
    Ok(Json(MessageResponse::new("房源删除成功")))
}
