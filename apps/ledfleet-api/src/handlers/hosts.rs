//! 设备登记 handlers
//!
//! - GET /get_hosts - 列出设备（登记顺序）
//! - POST /add_host - 登记设备（hostname、port 必填，不去重）
//! - POST /delete_host - 删除设备；id 不存在时 `applied=false`

use crate::AppState;
use crate::utils::{host_to_dto, normalize_required, parse_json, storage_error};
use api_contract::{AddHostRequest, ApiResponse, HostDto, IdRequest, MutationDto};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// 列出设备
pub async fn list_hosts(State(state): State<AppState>) -> Response {
    match state.device_store.list_devices().await {
        Ok(items) => {
            let data: Vec<HostDto> = items.into_iter().map(host_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 登记设备
pub async fn add_host(
    State(state): State<AppState>,
    payload: Result<Json<AddHostRequest>, JsonRejection>,
) -> Response {
    let req = match parse_json(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let hostname = match normalize_required(req.hostname, "hostname") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let port = match normalize_required(req.port, "port") {
        Ok(value) => value,
        Err(response) => return response,
    };
    match state.device_store.add_device(&hostname, &port).await {
        Ok(item) => (
            StatusCode::OK,
            Json(ApiResponse::success(host_to_dto(item))),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}

/// 删除设备
pub async fn delete_host(
    State(state): State<AppState>,
    payload: Result<Json<IdRequest>, JsonRejection>,
) -> Response {
    let req = match parse_json(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    match state.device_store.remove_device(req.id).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ApiResponse::success(MutationDto {
                applied: outcome.is_applied(),
            })),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}
