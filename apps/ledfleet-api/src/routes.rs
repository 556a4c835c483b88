//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 系统：/health, /metrics
//! - 设备端命令：/set_message, /set_heart, /set_smiley, /clear（可关闭）
//! - 留言管理：/get_messages, /update_message, /delete_message
//! - 设备登记：/get_hosts, /add_host, /delete_host
//! - 控制端下发：/send_message, /send_heart, /send_smiley, /set_clear

use super::AppState;
use super::handlers::*;
use crate::middleware::request_context;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

/// 创建 API 路由
pub fn create_api_router(adapter_enabled: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(get_metrics))
        .route("/get_messages", get(list_messages))
        .route("/update_message", put(update_message))
        .route("/delete_message", delete(delete_message))
        .route("/get_hosts", get(list_hosts))
        .route("/add_host", post(add_host))
        .route("/delete_host", post(delete_host))
        .route("/send_message", post(send_message))
        .route("/send_heart", post(send_heart))
        .route("/send_smiley", post(send_smiley))
        .route("/set_clear", post(set_clear));
    if !adapter_enabled {
        return router;
    }
    router
        .route("/set_message", post(set_message))
        .route("/set_heart", post(set_heart))
        .route("/set_smiley", post(set_smiley))
        .route("/clear", post(clear))
}

/// 组装完整应用：路由 + 状态 + 请求追踪
pub fn build_app(state: AppState, adapter_enabled: bool) -> Router {
    create_api_router(adapter_enabled)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // 注入 request_id/trace_id
        .layer(middleware::from_fn(request_context))
}
