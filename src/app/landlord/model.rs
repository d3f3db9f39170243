//! 房东配置数据模型

use serde::{Deserialize, Serialize};

use crate::store::{merge_field, MergePatch};

/// 房东配置单例
///
/// `password` 永远不会被序列化，任何响应都拿不到它。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandlordConfig {
    pub name: String,
    pub avatar: String,
    pub phone: String,
    pub wechat_id: String,
    pub qr_code_url: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl LandlordConfig {
    /// 精确比较，不做任何规范化
    pub fn password_matches(&self, candidate: Option<&str>) -> bool {
        candidate == Some(self.password.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LandlordConfigPatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub wechat_id: Option<String>,
    pub qr_code_url: Option<String>,
    pub password: Option<String>,
}

impl MergePatch<LandlordConfig> for LandlordConfigPatch {
    fn merge_into(self, target: &mut LandlordConfig) {
        merge_field(&mut target.name, self.name);
        merge_field(&mut target.avatar, self.avatar);
        merge_field(&mut target.phone, self.phone);
        merge_field(&mut target.wechat_id, self.wechat_id);
        merge_field(&mut target.qr_code_url, self.qr_code_url);
        merge_field(&mut target.password, self.password);
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub password: Option<String>,
}
