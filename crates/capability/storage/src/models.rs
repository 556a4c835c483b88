//! 数据模型
//!
//! - 设备模型：DeviceRecord（对应 `hosts` 表）
//! - 留言模型：MessageRecord（对应 `messages` 表）
//! - 写操作结果：MutationOutcome

use chrono::{Local, NaiveDateTime, Timelike};

/// 设备记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    pub id: i64,
    pub hostname: String,
    pub port: String,
}

impl DeviceRecord {
    /// `hostname:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }
}

/// 留言记录。`created_at` 创建后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub id: i64,
    pub text: String,
    pub created_at: NaiveDateTime,
    pub author: String,
}

/// 更新/删除的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// 命中一行并已生效
    Applied,
    /// 目标 id 不存在，未做任何修改
    NoOp,
}

impl MutationOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows > 0 { Self::Applied } else { Self::NoOp }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// 当前本地时间（秒级精度）。
pub fn local_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
