//! 房源业务服务

use tracing::{info, warn};

use super::model::{CreatePropertyRequest, Property, PropertyPatch};
use crate::core::error::CoreError;
use crate::store::SharedStore;
use crate::utils;

#[derive(Clone)]
pub struct PropertyService {
    store: SharedStore,
}

impl PropertyService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_properties(&self) -> Vec<Property> {
        let store = self.store.lock().await;
        store.properties.list_all().to_vec()
    }

    pub async fn get_property(&self, id: &str) -> Result<Property, CoreError> {
        let store = self.store.lock().await;
        let property = store.properties.find_by_id(id).map_err(|e| {
            warn!("查询房源失败: {}", e);
            e
        })?;
        Ok(property.clone())
    }

    pub async fn create_property(&self, req: CreatePropertyRequest) -> Property {
        let id = utils::property_id(utils::unix_seconds());
        let property = req.into_property(id, utils::today());

        let mut store = self.store.lock().await;
        let created = store.properties.insert_at_front(property).clone();
        info!("新增房源 {} ({})", created.id, created.title);
        created
    }

    pub async fn update_property(
        &self,
        id: &str,
        patch: PropertyPatch,
    ) -> Result<Property, CoreError> {
        let mut store = self.store.lock().await;
        let updated = store.properties.replace_by_id(id, patch).map_err(|e| {
            warn!("更新房源失败: {}", e);
            e
        })?;
        info!("更新房源 {}", id);
        Ok(updated.clone())
    }

    pub async fn delete_property(&self, id: &str) -> Result<Property, CoreError> {
        let mut store = self.store.lock().await;
        let removed = store.properties.remove_by_id(id).map_err(|e| {
            warn!("删除房源失败: {}", e);
            e
        })?;
        info!("删除房源 {}", id);
        Ok(removed)
    }
}
