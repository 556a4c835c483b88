//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：bad_request_error, validation_error, not_found_error, storage_error,
//!   adapter_error, control_error
//! - DTO 转换：host_to_dto, message_to_dto, dispatch_result_to_dto
//!
//! 状态码约定：校验失败 400，资源不存在 404，存储/内部错误 500。

use api_contract::{ApiResponse, DispatchResultDto, HostDto, MessageDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::ValidationError;
use ledfleet_adapter::AdapterError;
use ledfleet_control::{ControlError, DispatchResult};
use ledfleet_storage::{DeviceRecord, MessageRecord, StorageError};
use tracing::warn;

fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<()>::error(code, message.into()))).into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, "INVALID.REQUEST", message)
}

/// 命令校验失败响应（原因码取自校验错误）
pub fn validation_error(err: ValidationError) -> Response {
    error_response(StatusCode::BAD_REQUEST, err.code(), err.to_string())
}

/// 资源未找到错误响应
pub fn not_found_error(message: impl Into<String>) -> Response {
    error_response(StatusCode::NOT_FOUND, "RESOURCE.NOT_FOUND", message)
}

/// 存储错误响应
pub fn storage_error(err: StorageError) -> Response {
    warn!(error = %err, "storage_error");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "STORAGE.ERROR",
        err.to_string(),
    )
}

/// 设备端适配器错误响应
pub fn adapter_error(err: AdapterError) -> Response {
    match err {
        AdapterError::Validation(err) => validation_error(err),
        AdapterError::Storage(err) => storage_error(err),
        err @ AdapterError::Display(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            err.code(),
            err.to_string(),
        ),
    }
}

/// 控制端下发错误响应
pub fn control_error(err: ControlError) -> Response {
    match err {
        ControlError::Validation(err) => validation_error(err),
        ControlError::Storage(err) => storage_error(err),
        err @ ControlError::UnknownDevice(_) => not_found_error(err.to_string()),
    }
}

/// DeviceRecord 转 HostDto
pub fn host_to_dto(record: DeviceRecord) -> HostDto {
    HostDto {
        id: record.id,
        hostname: record.hostname,
        port: record.port,
    }
}

/// MessageRecord 转 MessageDto
pub fn message_to_dto(record: MessageRecord) -> MessageDto {
    MessageDto {
        id: record.id,
        message: record.text,
        created_at: record.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        author: record.author,
    }
}

/// DispatchResult 转 DispatchResultDto
pub fn dispatch_result_to_dto(result: DispatchResult) -> DispatchResultDto {
    DispatchResultDto {
        device: host_to_dto(result.device),
        succeeded: result.succeeded,
        error_detail: result.error_detail,
    }
}
