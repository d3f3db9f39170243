//! 聊天消息数据模型

use serde::{Deserialize, Serialize};

use crate::store::{MergePatch, Record};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub receiver: String,
    pub content: String,
    /// Unix 时间戳（秒）
    pub timestamp: i64,
    pub is_read: bool,
}

impl Record for ChatMessage {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateChatMessageRequest {
    pub sender: Option<String>,
    pub receiver: Option<String>,
    pub content: Option<String>,
}

impl CreateChatMessageRequest {
    /// 新消息总是未读
    pub fn into_message(self, id: String, timestamp: i64) -> ChatMessage {
        ChatMessage {
            id,
            sender: self.sender.unwrap_or_default(),
            receiver: self.receiver.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            timestamp,
            is_read: false,
        }
    }
}

/// 标记已读
pub struct MarkRead;

impl MergePatch<ChatMessage> for MarkRead {
    fn merge_into(self, target: &mut ChatMessage) {
        target.is_read = true;
    }
}
