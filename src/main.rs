use std::path::PathBuf;

use anyhow::Context;
use rental_mock::core::config::load_config;
use rental_mock::infrastructure::logger::Logger;
use rental_mock::{build_router, AppState, Store};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个命令行参数可指定配置文件
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref()).context("加载配置失败")?;

    Logger::init(&config.logging);

    let store = Store::seeded();
    info!(
        "✅ 已载入演示数据: {} 个房源, {} 个用户",
        store.properties.len(),
        store.users.len()
    );

    let app = build_router(AppState::new(store.into_shared()));

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 模拟后端运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /api/properties           - 房源列表");
    info!("   POST   /api/properties           - 新增房源");
    info!("   GET    /api/properties/:id       - 房源详情");
    info!("   PUT    /api/properties/:id       - 更新房源");
    info!("   DELETE /api/properties/:id       - 删除房源");
    info!("   GET    /api/users                - 用户列表");
    info!("   POST   /api/users                - 新增用户");
    info!("   POST   /api/users/auth           - 全局实名认证");
    info!("   GET    /api/chat                 - 消息列表");
    info!("   POST   /api/chat                 - 发送消息");
    info!("   PUT    /api/chat/:id/read        - 标记已读");
    info!("   GET    /api/landlord/config      - 房东配置");
    info!("   PUT    /api/landlord/config      - 更新房东配置");
    info!("   POST   /api/landlord/login       - 房东登录");
    info!("   GET    /api/health               - 健康检查");

    axum::serve(listener, app).await.context("服务器运行失败")?;
    Ok(())
}
