//! 核心中间件模块

use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
        },
        HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::info;

pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    info!(
        "{} {} - {} - {}ms - User-Agent: {:?}",
        method,
        uri,
        status,
        duration.as_millis(),
        user_agent
    );

    response
}

/// 任意路径的 OPTIONS 预检请求直接返回空的 200
pub async fn preflight_middleware(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return (
            StatusCode::OK,
            [(CONTENT_TYPE, HeaderValue::from_static("text/plain"))],
        )
            .into_response();
    }

    next.run(req).await
}

/// 给每个响应加上固定的跨域头
pub async fn cors_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );

    response
}
