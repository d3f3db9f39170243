//! 房东配置单例

pub mod handler;
pub mod model;
pub mod service;
