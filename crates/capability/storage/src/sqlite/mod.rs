//! # SQLite 存储实现模块
//!
//! 所有存储接口的 SQLite 实现，用于生产环境。
//!
//! ## 设计原则
//!
//! 1. **参数化查询**：所有 SQL 使用参数绑定，禁止字符串拼接
//! 2. **单语句操作**：每个接口方法只执行一条语句，从连接池借用连接、用完即还
//! 3. **显式空操作**：更新/删除通过 `rows_affected` 判定 `Applied` / `NoOp`
//!
//! ## 数据库模式
//!
//! - `hosts(id integer primary key, hostname text, port text)`
//! - `messages(id integer primary key, message text, datetime text, author text)`
//!
//! `datetime` 以本地时间 `YYYY-MM-DD HH:MM:SS` 文本存储，与历史数据格式一致。
//!
//! ## 连接池
//!
//! 由 `connection.rs` 创建并在进程启动时注入；停机时由调用方关闭。

pub mod device;
pub mod message;

pub use device::*;
pub use message::*;
