//! 留言管理 handlers
//!
//! - GET /get_messages - 列出留言（写入顺序）
//! - PUT /update_message - 替换文本，创建时间与作者不变
//! - DELETE /delete_message - 删除留言
//!
//! 留言只在设备端受理文字命令时创建，这里不提供新增接口。
//! 对不存在的 id 更新/删除返回 `applied=false`。

use crate::AppState;
use crate::utils::{message_to_dto, parse_json, storage_error};
use api_contract::{ApiResponse, IdRequest, MessageDto, MutationDto, UpdateMessageRequest};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ledfleet_storage::{MutationOutcome, StorageError};

fn mutation_response(result: Result<MutationOutcome, StorageError>) -> Response {
    match result {
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

/// 列出留言
pub async fn list_messages(State(state): State<AppState>) -> Response {
    match state.message_store.list_messages().await {
        Ok(items) => {
            let data: Vec<MessageDto> = items.into_iter().map(message_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 更新留言文本
pub async fn update_message(
    State(state): State<AppState>,
    payload: Result<Json<UpdateMessageRequest>, JsonRejection>,
) -> Response {
    let req = match parse_json(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    mutation_response(state.message_store.update_message(req.id, &req.message).await)
}

/// 删除留言
pub async fn delete_message(
    State(state): State<AppState>,
    payload: Result<Json<IdRequest>, JsonRejection>,
) -> Response {
    let req = match parse_json(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    mutation_response(state.message_store.delete_message(req.id).await)
}
