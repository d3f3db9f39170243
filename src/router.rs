//! 路由表
//!
//! 路径与方法都精确匹配；未匹配的路径或方法一律返回纯文本 404。
//! 例外：`/api/properties/` 视为空 id，按房源不存在处理。

use axum::{
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post, put, MethodRouter},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::app::{chat, landlord, property, user, AppState};
use crate::core::middleware::{
    cors_headers_middleware, preflight_middleware, request_logging_middleware,
};
use crate::core::response::HealthResponse;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/properties",
            endpoint(
                get(property::handler::list_properties).post(property::handler::create_property),
            ),
        )
        .route(
            "/api/properties/:id",
            endpoint(
                get(property::handler::get_property)
                    .put(property::handler::update_property)
                    .delete(property::handler::delete_property),
            ),
        )
        .route(
            "/api/properties/",
            endpoint(
                get(property::handler::missing_property_id)
                    .put(property::handler::missing_property_id)
                    .delete(property::handler::missing_property_id),
            ),
        )
        .route(
            "/api/users",
            endpoint(get(user::handler::list_users).post(user::handler::create_user)),
        )
        .route("/api/users/auth", endpoint(post(user::handler::platform_auth)))
        .route(
            "/api/chat",
            endpoint(get(chat::handler::list_messages).post(chat::handler::create_message)),
        )
        .route("/api/chat/:id/read", endpoint(put(chat::handler::mark_as_read)))
        .route(
            "/api/landlord/config",
            endpoint(
                get(landlord::handler::get_config).put(landlord::handler::update_config),
            ),
        )
        .route("/api/landlord/login", endpoint(post(landlord::handler::login)))
        .route("/api/health", endpoint(get(health_check)))
        .fallback(route_not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(cors_headers_middleware))
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(middleware::from_fn(preflight_middleware)),
        )
}

/// 已知路径上的未知方法同样按 404 处理
fn endpoint(method_router: MethodRouter<AppState>) -> MethodRouter<AppState> {
    method_router.fallback(route_not_found)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn route_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
