//! 应用层：每类资源一个子模块（模型、服务、处理器）

pub mod chat;
pub mod landlord;
pub mod property;
pub mod user;

use crate::store::SharedStore;

use chat::service::ChatService;
use landlord::service::LandlordService;
use property::service::PropertyService;
use user::service::UserService;

/// 路由共享状态，所有服务持有同一个存储句柄
#[derive(Clone)]
pub struct AppState {
    pub property_service: PropertyService,
    pub user_service: UserService,
    pub chat_service: ChatService,
    pub landlord_service: LandlordService,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            property_service: PropertyService::new(store.clone()),
            user_service: UserService::new(store.clone()),
            chat_service: ChatService::new(store.clone()),
            landlord_service: LandlordService::new(store),
        }
    }
}
