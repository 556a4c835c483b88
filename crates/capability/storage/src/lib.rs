//! # LED Fleet Storage 模块
//!
//! 设备登记表与留言表的存储抽象层，支持多种存储后端实现。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`traits.rs`)：`DeviceStore` / `MessageStore` 异步 Trait
//! 2. **数据模型层** (`models.rs`)：`DeviceRecord`、`MessageRecord`、`MutationOutcome`
//! 3. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 4. **连接管理层** (`connection.rs`)：SQLite 连接池与建表
//! 5. **实现层**：
//!    - `in_memory/`：内存存储实现（用于测试和无持久化运行）
//!    - `sqlite/`：SQLite 存储实现（生产环境使用）
//!
//! ## 数据表
//!
//! - `messages(id, message, datetime, author)`
//! - `hosts(id, hostname, port)`
//!
//! 两张表在启动时以 `create table if not exists` 幂等创建。
//!
//! ## 约定
//!
//! - 每个操作只执行一条语句，不持有跨操作的连接或锁
//! - 对不存在 id 的更新/删除是显式的空操作：返回 [`MutationOutcome::NoOp`]，不是错误
//! - 空表上的列表查询返回空序列
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use ledfleet_storage::{DeviceStore, SqliteDeviceStore, open_pool};
//!
//! let pool = open_pool("sqlite://messages.db").await?;
//! let devices = SqliteDeviceStore::new(pool.clone());
//! let device = devices.add_device("pi4.local", "8000").await?;
//! pool.close().await;
//! ```

pub mod connection;
pub mod error;
pub mod in_memory;
pub mod models;
pub mod sqlite;
pub mod traits;

pub use connection::*;
pub use error::*;
pub use models::*;
pub use traits::*;

pub use in_memory::{InMemoryDeviceStore, InMemoryMessageStore};
pub use sqlite::{SqliteDeviceStore, SqliteMessageStore};
