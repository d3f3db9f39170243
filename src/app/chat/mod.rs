//! 聊天消息

pub mod handler;
pub mod model;
pub mod service;
