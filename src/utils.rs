//! 时间与编号工具
//!
//! 编号规则沿用前端约定：房源 `YW-<秒级时间戳>`，消息 `M<秒级时间戳>`，
//! 用户 `U<三位补零序号>`。同一秒内的多次创建、或删除后再创建，都可能产生重复编号。

use chrono::{Local, Utc};

/// 当前 Unix 时间（秒）
pub fn unix_seconds() -> i64 {
    Utc::now().timestamp()
}

/// 服务器本地日期，`YYYY-MM-DD`
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// 服务器本地时间，精确到分钟
pub fn minute_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}

pub fn property_id(unix_seconds: i64) -> String {
    format!("YW-{}", unix_seconds)
}

pub fn chat_message_id(unix_seconds: i64) -> String {
    format!("M{}", unix_seconds)
}

/// 按集合当前大小生成下一个用户编号
pub fn user_id(current_len: usize) -> String {
    format!("U{:03}", current_len + 1)
}
