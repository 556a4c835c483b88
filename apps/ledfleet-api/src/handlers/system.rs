//! 系统接口
//!
//! - GET /health
//! - GET /metrics

use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ledfleet_telemetry::metrics;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

/// 计数器快照
pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            dispatch_attempts: snapshot.dispatch_attempts,
            dispatch_success: snapshot.dispatch_success,
            dispatch_failure: snapshot.dispatch_failure,
            dispatch_latency_ms_total: snapshot.dispatch_latency_ms_total,
            dispatch_latency_ms_count: snapshot.dispatch_latency_ms_count,
            commands_applied: snapshot.commands_applied,
            commands_rejected: snapshot.commands_rejected,
            messages_persisted: snapshot.messages_persisted,
        })),
    )
        .into_response()
}
