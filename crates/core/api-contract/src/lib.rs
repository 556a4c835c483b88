//! 稳定的 DTO 与 API 响应契约。
//!
//! - 设备端命令报文：`/set_message`、`/set_heart`、`/set_smiley`、`/clear`
//! - 控制端下发报文：`/send_*`、`/set_clear`（可选 `deviceId`）
//! - 管理接口报文：留言与设备登记表

use domain::{DisplayCommand, DisplayRequest};
use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// `POST /set_message` 请求体。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetMessageRequest {
    pub message: String,
    pub color: Vec<i64>,
    #[serde(default)]
    pub author: String,
}

impl From<SetMessageRequest> for DisplayRequest {
    fn from(req: SetMessageRequest) -> Self {
        DisplayRequest::text(req.message, req.color, req.author)
    }
}

/// `POST /set_heart` 请求体。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetHeartRequest {
    pub color: Vec<i64>,
}

impl From<SetHeartRequest> for DisplayRequest {
    fn from(req: SetHeartRequest) -> Self {
        DisplayRequest::heart(req.color)
    }
}

/// `POST /set_smiley` 请求体。缺省表情按空串处理（会被拒绝）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSmileyRequest {
    #[serde(default)]
    pub mood: String,
    pub color: Vec<i64>,
}

impl From<SetSmileyRequest> for DisplayRequest {
    fn from(req: SetSmileyRequest) -> Self {
        DisplayRequest::smiley(req.mood, req.color)
    }
}

/// 设备端受理应答：状态文本 + 校验后的命令回显。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayAck {
    pub status: String,
    pub command: DisplayCommand,
}

/// `POST /send_message` 请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[serde(alias = "device_id")]
    pub device_id: Option<i64>,
    pub message: String,
    pub color: Vec<i64>,
    #[serde(default)]
    pub author: String,
}

impl SendMessageRequest {
    pub fn into_parts(self) -> (Option<i64>, DisplayRequest) {
        (
            self.device_id,
            DisplayRequest::text(self.message, self.color, self.author),
        )
    }
}

/// `POST /send_heart` 请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendHeartRequest {
    #[serde(alias = "device_id")]
    pub device_id: Option<i64>,
    pub color: Vec<i64>,
}

impl SendHeartRequest {
    pub fn into_parts(self) -> (Option<i64>, DisplayRequest) {
        (self.device_id, DisplayRequest::heart(self.color))
    }
}

/// `POST /send_smiley` 请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmileyRequest {
    #[serde(alias = "device_id")]
    pub device_id: Option<i64>,
    #[serde(default)]
    pub mood: String,
    pub color: Vec<i64>,
}

impl SendSmileyRequest {
    pub fn into_parts(self) -> (Option<i64>, DisplayRequest) {
        (self.device_id, DisplayRequest::smiley(self.mood, self.color))
    }
}

/// `POST /set_clear` 请求体（可整体省略）。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendClearRequest {
    #[serde(default, alias = "device_id")]
    pub device_id: Option<i64>,
}

/// 单设备下发结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResultDto {
    pub device: HostDto,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

/// 设备返回结构。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostDto {
    pub id: i64,
    pub hostname: String,
    pub port: String,
}

/// 留言返回结构。`createdAt` 形如 `2024-03-01 08:30:00`（本地时间）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: i64,
    pub message: String,
    pub created_at: String,
    pub author: String,
}

/// 设备登记请求体。
#[derive(Debug, Deserialize)]
pub struct AddHostRequest {
    pub hostname: String,
    pub port: String,
}

/// 按 id 操作的请求体（删除设备 / 删除留言）。
#[derive(Debug, Deserialize)]
pub struct IdRequest {
    pub id: i64,
}

/// 留言文本更新请求体。
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub id: i64,
    pub message: String,
}

/// 更新/删除结果：`applied=false` 表示目标不存在。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationDto {
    pub applied: bool,
}

/// `GET /metrics` 返回结构。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub dispatch_attempts: u64,
    pub dispatch_success: u64,
    pub dispatch_failure: u64,
    pub dispatch_latency_ms_total: u64,
    pub dispatch_latency_ms_count: u64,
    pub commands_applied: u64,
    pub commands_rejected: u64,
    pub messages_persisted: u64,
}
