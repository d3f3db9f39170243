//! 内存资源存储
//!
//! 四类资源都常驻内存：房源、用户、聊天消息三个有序集合，外加房东配置单例。
//! 集合保持插入顺序，新记录插在最前面（最新的排在前面）。

mod seed;

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::app::chat::model::ChatMessage;
use crate::app::landlord::model::LandlordConfig;
use crate::app::property::model::Property;
use crate::app::user::model::User;

/// 整个进程共享的存储句柄，所有请求串行地持锁读写
pub type SharedStore = Arc<Mutex<Store>>;

/// 存储错误类型
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{collection} 中不存在记录 {id}")]
    NotFound { collection: &'static str, id: String },
}

/// 可按 id 寻址的记录
pub trait Record {
    fn id(&self) -> &str;
}

/// 浅合并补丁：补丁中出现的字段覆盖目标字段，缺省字段保持不变
pub trait MergePatch<T> {
    fn merge_into(self, target: &mut T);
}

/// 补丁字段存在时覆盖目标字段
pub fn merge_field<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// 有序记录集合
#[derive(Debug, Clone)]
pub struct Collection<T> {
    name: &'static str,
    items: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            items: Vec::new(),
        }
    }

    pub fn with_items(name: &'static str, items: Vec<T>) -> Self {
        Self { name, items }
    }

    pub fn list_all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 线性扫描查找
    pub fn find_by_id(&self, id: &str) -> Result<&T, StoreError> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| self.not_found(id))
    }

    /// 插入到集合最前面，不做重复 id 检查
    pub fn insert_at_front(&mut self, record: T) -> &T {
        self.items.insert(0, record);
        &self.items[0]
    }

    pub fn replace_by_id<P>(&mut self, id: &str, patch: P) -> Result<&T, StoreError>
    where
        P: MergePatch<T>,
    {
        let index = self.position(id)?;
        let record = &mut self.items[index];
        patch.merge_into(record);
        Ok(record)
    }

    pub fn remove_by_id(&mut self, id: &str) -> Result<T, StoreError> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| self.not_found(id))
    }

    fn not_found(&self, id: &str) -> StoreError {
        StoreError::NotFound {
            collection: self.name,
            id: id.to_string(),
        }
    }
}

/// 单例记录，不存在“找不到”的情况
#[derive(Debug, Clone)]
pub struct Singleton<T> {
    value: T,
}

impl<T> Singleton<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn merge<P: MergePatch<T>>(&mut self, patch: P) -> &T {
        patch.merge_into(&mut self.value);
        &self.value
    }
}

pub const PROPERTIES: &str = "properties";
pub const USERS: &str = "users";
pub const CHAT_MESSAGES: &str = "chat";

/// 资源存储
#[derive(Debug, Clone)]
pub struct Store {
    pub properties: Collection<Property>,
    pub users: Collection<User>,
    pub chat_messages: Collection<ChatMessage>,
    pub landlord: Singleton<LandlordConfig>,
}

impl Store {
    /// 带演示数据的存储，进程启动时使用
    pub fn seeded() -> Self {
        Self {
            properties: Collection::with_items(PROPERTIES, seed::properties()),
            users: Collection::with_items(USERS, seed::users()),
            chat_messages: Collection::new(CHAT_MESSAGES),
            landlord: Singleton::new(seed::landlord_config()),
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }
}
