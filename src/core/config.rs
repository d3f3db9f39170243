//! 服务配置
//!
//! 配置只来自 TOML 文件或内置默认值，不读取环境变量。

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

/// 配置文件的默认查找位置
pub const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        self.socket_addr()?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http.bind_address, self.http.port)
            .parse()
            .map_err(|_| {
                ConfigError::Validation(format!("无效的绑定地址: {}", self.http.bind_address))
            })
    }
}

/// 加载配置：优先使用显式路径，其次查找默认位置，都没有则使用默认配置
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match explicit {
        Some(path) => Config::load_from_file(path)?,
        None => match CONFIG_PATHS.iter().map(Path::new).find(|p| p.exists()) {
            Some(path) => Config::load_from_file(path)?,
            None => Config::default(),
        },
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.port, 3001);
        assert_eq!(config.http.bind_address, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[http]\nport = 4000\n").unwrap();
        assert_eq!(config.http.port, 4000);
        assert_eq!(config.http.bind_address, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = Config::default();
        config.http.bind_address = "not an address".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.http.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("server.toml");
        fs::write(
            &config_path,
            "[http]\nbind_address = \"127.0.0.1\"\nport = 3100\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = load_config(Some(config_path.as_path())).unwrap();
        assert_eq!(config.http.port, 3100);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3100");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        let result = load_config(Some(absent.as_path()));
        assert!(matches!(result, Err(ConfigError::FileRead(_))));
    }
}
