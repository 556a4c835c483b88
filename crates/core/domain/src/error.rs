//! 显示命令校验错误。

/// 校验失败：颜色越界、未知图标或表情。
///
/// 在任何网络或存储副作用之前返回，只报告给直接调用方。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("color must have exactly 3 channels, got {0}")]
    ColorArity(usize),
    #[error("color channel {channel} out of range [0,255]: {value}")]
    ColorRange { channel: usize, value: i64 },
    #[error("unknown icon: {0:?}")]
    UnknownIcon(String),
    #[error("unknown mood: {0:?}")]
    UnknownMood(String),
}

impl ValidationError {
    /// 稳定的拒绝原因码（用于线上应答）。
    pub fn code(&self) -> &'static str {
        match self {
            Self::ColorArity(_) => "VALIDATION.COLOR_ARITY",
            Self::ColorRange { .. } => "VALIDATION.COLOR_RANGE",
            Self::UnknownIcon(_) => "VALIDATION.UNKNOWN_ICON",
            Self::UnknownMood(_) => "VALIDATION.UNKNOWN_MOOD",
        }
    }
}
