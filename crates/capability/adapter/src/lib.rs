//! 设备端适配器：把线上命令落到本机点阵与留言表。
//!
//! - 文字：先滚动显示，显示成功后才写入留言表
//! - 图标：经图案库渲染后整屏设置像素，不落库
//! - 清屏：直接清屏，不落库
//!
//! 校验失败的请求不会触碰显示或存储。

use api_contract::DisplayAck;
use domain::{DisplayCommand, DisplayRequest, ValidationError};
use ledfleet_display::{DisplayCapability, DisplayError};
use ledfleet_storage::{MessageStore, StorageError};
use ledfleet_telemetry::{record_command_applied, record_command_rejected, record_message_persisted};
use std::sync::Arc;
use tracing::{info, warn};

pub const STATUS_MESSAGE_SET: &str = "Message set";
pub const STATUS_HEART_SET: &str = "Heart set";
pub const STATUS_SMILEY_SET: &str = "Smiley set";
pub const STATUS_DISPLAY_CLEARED: &str = "Display cleared";

/// 适配器错误。
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Display(#[from] DisplayError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AdapterError {
    /// 线上拒绝原因码。
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.code(),
            Self::Display(_) => "DISPLAY.UNAVAILABLE",
            Self::Storage(_) => "STORAGE.ERROR",
        }
    }
}

/// 设备端适配器。
pub struct LocalDeviceAdapter {
    display: Arc<dyn DisplayCapability>,
    messages: Arc<dyn MessageStore>,
    scroll_speed: f64,
}

impl LocalDeviceAdapter {
    pub fn new(
        display: Arc<dyn DisplayCapability>,
        messages: Arc<dyn MessageStore>,
        scroll_speed: f64,
    ) -> Self {
        Self {
            display,
            messages,
            scroll_speed,
        }
    }

    /// 校验原始请求后应用。
    pub async fn receive(&self, request: DisplayRequest) -> Result<DisplayAck, AdapterError> {
        match request.validate() {
            Ok(command) => self.apply(command).await,
            Err(err) => {
                record_command_rejected();
                warn!(target: "ledfleet.adapter", code = err.code(), error = %err, "command_rejected");
                Err(err.into())
            }
        }
    }

    /// 应用已校验的命令。
    pub async fn apply(&self, command: DisplayCommand) -> Result<DisplayAck, AdapterError> {
        let kind = command.kind();
        match self.render(&command).await {
            Ok(status) => {
                record_command_applied();
                info!(target: "ledfleet.adapter", kind, status, "command_applied");
                Ok(DisplayAck {
                    status: status.to_string(),
                    command,
                })
            }
            Err(err) => {
                record_command_rejected();
                warn!(target: "ledfleet.adapter", kind, code = err.code(), error = %err, "command_rejected");
                Err(err)
            }
        }
    }

    async fn render(&self, command: &DisplayCommand) -> Result<&'static str, AdapterError> {
        match command {
            DisplayCommand::ShowText {
                text,
                color,
                author,
            } => {
                self.display.show_message(text, self.scroll_speed, *color)?;
                let record = self.messages.create_message(text, author).await?;
                record_message_persisted();
                info!(
                    target: "ledfleet.adapter",
                    message_id = record.id,
                    author = %record.author,
                    "message_persisted"
                );
                Ok(STATUS_MESSAGE_SET)
            }
            DisplayCommand::ShowIcon { icon, color } => {
                let pattern = ledfleet_pattern::render(*icon, *color);
                self.display.set_pixels(&pattern)?;
                Ok(if icon.mood().is_some() {
                    STATUS_SMILEY_SET
                } else {
                    STATUS_HEART_SET
                })
            }
            DisplayCommand::Clear => {
                self.display.clear()?;
                Ok(STATUS_DISPLAY_CLEARED)
            }
        }
    }
}
