//! 聊天消息处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::{ChatMessage, CreateChatMessageRequest};
use crate::app::AppState;
use crate::core::{error::CoreError, extract::JsonBody};

pub async fn list_messages(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.chat_service.list_messages().await)
}

pub async fn create_message(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateChatMessageRequest>,
) -> (StatusCode, Json<ChatMessage>) {
    let message = state.chat_service.create_message(req).await;
    (StatusCode::CREATED, Json(message))
}

pub async fn mark_as_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ChatMessage>, CoreError> {
    let message = state.chat_service.mark_as_read(&id).await?;
    Ok(Json(message))
}
