//! 存储层错误类型
//!
//! 统一封装底层错误，并粗分为三类：
//! - Unavailable：存储不可用（连接池关闭/超时、IO、配置错误）
//! - Query：语句执行或行解码失败
//! - Lock：内存实现的锁中毒

/// 存储错误分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    Unavailable,
    Query,
    Lock,
}

#[derive(Debug)]
pub struct StorageError {
    kind: StorageErrorKind,
    message: String,
}

impl StorageError {
    pub fn new(kind: StorageErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn lock_failed() -> Self {
        Self::new(StorageErrorKind::Lock, "lock failed")
    }

    pub fn kind(&self) -> StorageErrorKind {
        self.kind
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StorageError {}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Configuration(_) => StorageErrorKind::Unavailable,
            _ => StorageErrorKind::Query,
        };
        Self::new(kind, err.to_string())
    }
}
