//! 存储接口 Trait 定义
//!
//! - DeviceStore：设备登记表（增 / 列 / 查 / 删，无更新）
//! - MessageStore：留言表（增 / 列 / 改文本 / 删）
//!
//! 设计原则：
//! - 所有接口返回 StorageError
//! - 更新/删除返回 MutationOutcome，区分"已生效"与"目标不存在的空操作"
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use crate::models::{DeviceRecord, MessageRecord, MutationOutcome};
use async_trait::async_trait;

/// 设备存储接口
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// 登记设备，返回分配的 id。不做 hostname+port 去重。
    async fn add_device(&self, hostname: &str, port: &str) -> Result<DeviceRecord, StorageError>;

    /// 列出所有设备（按 id 升序，即登记顺序）
    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, StorageError>;

    /// 查找指定设备
    async fn find_device(&self, id: i64) -> Result<Option<DeviceRecord>, StorageError>;

    /// 删除设备；id 不存在时返回 `NoOp`
    async fn remove_device(&self, id: i64) -> Result<MutationOutcome, StorageError>;
}

/// 留言存储接口
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// 写入留言，创建时间取当前本地时间
    async fn create_message(&self, text: &str, author: &str)
    -> Result<MessageRecord, StorageError>;

    /// 列出所有留言（写入顺序）
    async fn list_messages(&self) -> Result<Vec<MessageRecord>, StorageError>;

    /// 仅替换文本；创建时间与作者不变。id 不存在时返回 `NoOp`
    async fn update_message(&self, id: i64, text: &str) -> Result<MutationOutcome, StorageError>;

    /// 删除留言；id 不存在时返回 `NoOp`
    async fn delete_message(&self, id: i64) -> Result<MutationOutcome, StorageError>;
}
