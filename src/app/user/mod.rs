//! 用户线索

pub mod handler;
pub mod model;
pub mod service;
