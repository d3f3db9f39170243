//! 用户业务服务

use tracing::info;

use super::model::{CreateUserRequest, User};
use crate::store::SharedStore;
use crate::utils;

#[derive(Clone)]
pub struct UserService {
    store: SharedStore,
}

impl UserService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_users(&self) -> Vec<User> {
        let store = self.store.lock().await;
        store.users.list_all().to_vec()
    }

    /// 编号取决于创建时的集合大小，需要在同一把锁内生成
    pub async fn create_user(&self, req: CreateUserRequest) -> User {
        let mut store = self.store.lock().await;
        let id = utils::user_id(store.users.len());
        let user = req.into_user(id, utils::minute_stamp());

        let created = store.users.insert_at_front(user).clone();
        info!("新增用户 {} 来源: {}", created.id, created.source_property);
        created
    }
}
