//! 用户（线索）数据模型

use serde::{Deserialize, Serialize};

use crate::store::Record;

pub const DEFAULT_AUTH_STATUS: &str = "已实名";
pub const PLATFORM_AUTH_SOURCE: &str = "全局平台实名认证";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub source_property: String,
    pub auth_status: String,
    pub create_time: String,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 创建用户请求
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub source_property: Option<String>,
}

impl CreateUserRequest {
    /// 认证状态由服务端决定，请求中的值被忽略
    pub fn into_user(self, id: String, create_time: String) -> User {
        User {
            id,
            name: self.name.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            source_property: self.source_property.unwrap_or_default(),
            auth_status: DEFAULT_AUTH_STATUS.to_string(),
            create_time,
        }
    }
}

/// 全局实名认证请求，只携带姓名和手机号
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlatformAuthRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl From<PlatformAuthRequest> for CreateUserRequest {
    fn from(req: PlatformAuthRequest) -> Self {
        Self {
            name: req.name,
            phone: req.phone,
            source_property: Some(PLATFORM_AUTH_SOURCE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_defaults() {
        let user = CreateUserRequest::default()
            .into_user("U004".to_string(), "2024-03-23 10:00".to_string());
        assert_eq!(user.name, "");
        assert_eq!(user.auth_status, DEFAULT_AUTH_STATUS);
        assert_eq!(user.create_time, "2024-03-23 10:00");
    }

    #[test]
    fn test_create_user_ignores_caller_auth_status() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"name":"x","authStatus":"待认证"}"#).unwrap();
        let user = req.into_user("U004".to_string(), String::new());

        assert_eq!(user.auth_status, DEFAULT_AUTH_STATUS);
    }

    #[test]
    fn test_platform_auth_overrides_source() {
        let req: PlatformAuthRequest =
            serde_json::from_str(r#"{"name":"孙七","phone":"186","sourceProperty":"x"}"#).unwrap();
        let user = CreateUserRequest::from(req).into_user("U001".to_string(), String::new());

        assert_eq!(user.name, "孙七");
        assert_eq!(user.source_property, PLATFORM_AUTH_SOURCE);
    }
}
