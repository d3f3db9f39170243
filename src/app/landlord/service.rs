//! 房东配置与登录服务

use tracing::{info, warn};

use super::model::{LandlordConfig, LandlordConfigPatch};
use crate::core::error::CoreError;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct LandlordService {
    store: SharedStore,
}

impl LandlordService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn get_config(&self) -> LandlordConfig {
        let store = self.store.lock().await;
        store.landlord.get().clone()
    }

    pub async fn update_config(&self, patch: LandlordConfigPatch) -> LandlordConfig {
        let changes_password = patch.password.is_some();
        let mut store = self.store.lock().await;
        let updated = store.landlord.merge(patch).clone();
        info!("更新房东配置 (修改密码: {})", changes_password);
        updated
    }

    pub async fn login(&self, password: Option<&str>) -> Result<(), CoreError> {
        let store = self.store.lock().await;
        if store.landlord.get().password_matches(password) {
            info!("房东登录成功");
            Ok(())
        } else {
            warn!("房东登录失败: 密码错误");
            Err(CoreError::Unauthorized)
        }
    }
}
