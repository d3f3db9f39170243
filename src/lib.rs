//! # 租房前端联调用的模拟后端
//!
//! 在内存中维护房源、用户、聊天消息和房东配置，通过 REST 风格的 HTTP 接口读写：
//! - `store`：资源存储（有序集合 + 单例）
//! - `app`：按资源划分的模型、服务与处理器
//! - `router`：路由表与中间件装配
//! - `core` / `infrastructure`：配置、错误、日志等公共设施
//!
//! 所有数据随进程生灭，重启即恢复演示数据。

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod router;
pub mod store;
pub mod utils;

pub use app::AppState;
pub use router::build_router;
pub use store::{SharedStore, Store};
