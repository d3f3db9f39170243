//! 聊天消息业务服务

use tracing::{info, warn};

use super::model::{ChatMessage, CreateChatMessageRequest, MarkRead};
use crate::core::error::CoreError;
use crate::store::SharedStore;
use crate::utils;

#[derive(Clone)]
pub struct ChatService {
    store: SharedStore,
}

impl ChatService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_messages(&self) -> Vec<ChatMessage> {
        let store = self.store.lock().await;
        store.chat_messages.list_all().to_vec()
    }

    pub async fn create_message(&self, req: CreateChatMessageRequest) -> ChatMessage {
        let now = utils::unix_seconds();
        let message = req.into_message(utils::chat_message_id(now), now);

        let mut store = self.store.lock().await;
        let created = store.chat_messages.insert_at_front(message).clone();
        info!("新消息 {}: {} -> {}", created.id, created.sender, created.receiver);
        created
    }

    pub async fn mark_as_read(&self, id: &str) -> Result<ChatMessage, CoreError> {
        let mut store = self.store.lock().await;
        let message = store.chat_messages.replace_by_id(id, MarkRead).map_err(|e| {
            warn!("标记已读失败: {}", e);
            e
        })?;
        Ok(message.clone())
    }
}
