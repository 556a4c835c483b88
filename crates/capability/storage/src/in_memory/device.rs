//! 设备内存存储实现
//!
//! 功能：
//! - 设备登记、列表、查找、删除
//! - id 自增分配，从 1 开始

use crate::error::StorageError;
use crate::models::{DeviceRecord, MutationOutcome};
use crate::traits::DeviceStore;
use std::sync::RwLock;

/// 设备内存存储
///
/// 使用 RwLock + Vec 保持登记顺序。
pub struct InMemoryDeviceStore {
    devices: RwLock<Vec<DeviceRecord>>,
    next_id: RwLock<i64>,
}

impl InMemoryDeviceStore {
    /// 创建新的设备存储
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(Vec::new()),
            next_id: RwLock::new(1),
        }
    }
}

impl Default for InMemoryDeviceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DeviceStore for InMemoryDeviceStore {
    async fn add_device(&self, hostname: &str, port: &str) -> Result<DeviceRecord, StorageError> {
        let mut devices = self
            .devices
            .write()
            .map_err(|_| StorageError::lock_failed())?;
        let mut next_id = self
            .next_id
            .write()
            .map_err(|_| StorageError::lock_failed())?;
        let record = DeviceRecord {
            id: *next_id,
            hostname: hostname.to_string(),
            port: port.to_string(),
        };
        *next_id += 1;
        devices.push(record.clone());
        Ok(record)
    }

    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, StorageError> {
        let items = self
            .devices
            .read()
            .map(|devices| devices.clone())
            .map_err(|_| StorageError::lock_failed())?;
        Ok(items)
    }

    async fn find_device(&self, id: i64) -> Result<Option<DeviceRecord>, StorageError> {
        let item = self
            .devices
            .read()
            .map_err(|_| StorageError::lock_failed())?
            .iter()
            .find(|item| item.id == id)
            .cloned();
        Ok(item)
    }

    async fn remove_device(&self, id: i64) -> Result<MutationOutcome, StorageError> {
        let mut devices = self
            .devices
            .write()
            .map_err(|_| StorageError::lock_failed())?;
        let before = devices.len();
        devices.retain(|item| item.id != id);
        Ok(MutationOutcome::from_rows_affected(
            (before - devices.len()) as u64,
        ))
    }
}
