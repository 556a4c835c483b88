//! 内存存储实现模块
//!
//! 用于测试和 `LEDFLEET_STORAGE=memory` 的无持久化运行。
//!
//! 包含以下实现：
//! - DeviceStore: InMemoryDeviceStore
//! - MessageStore: InMemoryMessageStore

pub mod device;
pub mod message;

pub use device::*;
pub use message::*;
