//! 设备端命令 handlers
//!
//! - POST /set_message - 滚动文字并写入留言表
//! - POST /set_heart - 显示爱心
//! - POST /set_smiley - 显示笑脸（happy / sad）
//! - POST /clear - 清屏
//!
//! 受理时返回状态文本与校验后的命令；校验失败返回 400 与原因码，且不会部分渲染。

use crate::AppState;
use crate::utils::{adapter_error, parse_json};
use api_contract::{ApiResponse, SetHeartRequest, SetMessageRequest, SetSmileyRequest};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DisplayRequest;

async fn apply(state: &AppState, request: DisplayRequest) -> Response {
    match state.adapter.receive(request).await {
        Ok(ack) => (StatusCode::OK, Json(ApiResponse::success(ack))).into_response(),
        Err(err) => adapter_error(err),
    }
}

/// 滚动显示文字
pub async fn set_message(
    State(state): State<AppState>,
    payload: Result<Json<SetMessageRequest>, JsonRejection>,
) -> Response {
    match parse_json(payload) {
        Ok(req) => apply(&state, req.into()).await,
        Err(response) => response,
    }
}

/// 显示爱心
pub async fn set_heart(
    State(state): State<AppState>,
    payload: Result<Json<SetHeartRequest>, JsonRejection>,
) -> Response {
    match parse_json(payload) {
        Ok(req) => apply(&state, req.into()).await,
        Err(response) => response,
    }
}

/// 显示笑脸
pub async fn set_smiley(
    State(state): State<AppState>,
    payload: Result<Json<SetSmileyRequest>, JsonRejection>,
) -> Response {
    match parse_json(payload) {
        Ok(req) => apply(&state, req.into()).await,
        Err(response) => response,
    }
}

/// 清屏
pub async fn clear(State(state): State<AppState>) -> Response {
    apply(&state, DisplayRequest::Clear).await
}
