//! 控制端下发 handlers
//!
//! - POST /send_message
//! - POST /send_heart
//! - POST /send_smiley
//! - POST /set_clear（请求体可省略）
//!
//! 带 `deviceId` 时只下发到该设备（不存在返回 404），否则广播到所有已登记设备。
//! 校验失败在任何网络调用前返回 400；单设备的传输失败体现在结果列表中，整体仍为 200。

use crate::AppState;
use crate::utils::{control_error, dispatch_result_to_dto, parse_json, parse_optional_json};
use api_contract::{
    ApiResponse, DispatchResultDto, SendClearRequest, SendHeartRequest, SendMessageRequest,
    SendSmileyRequest,
};
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DisplayRequest;

async fn dispatch(state: &AppState, device_id: Option<i64>, request: DisplayRequest) -> Response {
    let results = match device_id {
        Some(device_id) => state
            .controller
            .dispatch_to_id(device_id, request)
            .await
            .map(|result| vec![result]),
        None => state.controller.broadcast(request).await,
    };
    match results {
        Ok(results) => {
            let data: Vec<DispatchResultDto> =
                results.into_iter().map(dispatch_result_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => control_error(err),
    }
}

/// 下发文字
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Response {
    match parse_json(payload) {
        Ok(req) => {
            let (device_id, request) = req.into_parts();
            dispatch(&state, device_id, request).await
        }
        Err(response) => response,
    }
}

/// 下发爱心
pub async fn send_heart(
    State(state): State<AppState>,
    payload: Result<Json<SendHeartRequest>, JsonRejection>,
) -> Response {
    match parse_json(payload) {
        Ok(req) => {
            let (device_id, request) = req.into_parts();
            dispatch(&state, device_id, request).await
        }
        Err(response) => response,
    }
}

/// 下发笑脸
pub async fn send_smiley(
    State(state): State<AppState>,
    payload: Result<Json<SendSmileyRequest>, JsonRejection>,
) -> Response {
    match parse_json(payload) {
        Ok(req) => {
            let (device_id, request) = req.into_parts();
            dispatch(&state, device_id, request).await
        }
        Err(response) => response,
    }
}

/// 下发清屏
pub async fn set_clear(State(state): State<AppState>, body: Bytes) -> Response {
    match parse_optional_json::<SendClearRequest>(&body) {
        Ok(req) => dispatch(&state, req.device_id, DisplayRequest::Clear).await,
        Err(response) => response,
    }
}
