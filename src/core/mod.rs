//! 核心层：配置、错误、响应、请求体提取与中间件

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
