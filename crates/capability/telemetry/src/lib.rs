//! 追踪、请求 ID 与进程内计数器。
//!
//! 日志 target 约定：
//! - `ledfleet.control`：命令下发（dispatch_sent / dispatch_failed）
//! - `ledfleet.adapter`：设备端受理（command_applied / command_rejected / message_persisted）
//! - `ledfleet.display`：点阵输出

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 计数器快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub dispatch_attempts: u64,
    pub dispatch_success: u64,
    pub dispatch_failure: u64,
    pub dispatch_latency_ms_total: u64,
    pub dispatch_latency_ms_count: u64,
    pub commands_applied: u64,
    pub commands_rejected: u64,
    pub messages_persisted: u64,
}

/// 进程内计数器（只增不减）。
#[derive(Default)]
pub struct TelemetryMetrics {
    dispatch_attempts: AtomicU64,
    dispatch_success: AtomicU64,
    dispatch_failure: AtomicU64,
    dispatch_latency_ms_total: AtomicU64,
    dispatch_latency_ms_count: AtomicU64,
    commands_applied: AtomicU64,
    commands_rejected: AtomicU64,
    messages_persisted: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            dispatch_attempts: self.dispatch_attempts.load(Ordering::Relaxed),
            dispatch_success: self.dispatch_success.load(Ordering::Relaxed),
            dispatch_failure: self.dispatch_failure.load(Ordering::Relaxed),
            dispatch_latency_ms_total: self.dispatch_latency_ms_total.load(Ordering::Relaxed),
            dispatch_latency_ms_count: self.dispatch_latency_ms_count.load(Ordering::Relaxed),
            commands_applied: self.commands_applied.load(Ordering::Relaxed),
            commands_rejected: self.commands_rejected.load(Ordering::Relaxed),
            messages_persisted: self.messages_persisted.load(Ordering::Relaxed),
        }
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局计数器实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info，可用 RUST_LOG 覆盖）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录一次单设备下发尝试。
pub fn record_dispatch_attempt() {
    metrics().dispatch_attempts.fetch_add(1, Ordering::Relaxed);
}

/// 记录单设备下发成功（设备端已确认）。
pub fn record_dispatch_success() {
    metrics().dispatch_success.fetch_add(1, Ordering::Relaxed);
}

/// 记录单设备下发失败（传输错误、超时或设备端拒绝）。
pub fn record_dispatch_failure() {
    metrics().dispatch_failure.fetch_add(1, Ordering::Relaxed);
}

/// 记录单设备下发耗时（毫秒）。
pub fn record_dispatch_latency_ms(latency_ms: u64) {
    let metrics = metrics();
    metrics
        .dispatch_latency_ms_total
        .fetch_add(latency_ms, Ordering::Relaxed);
    metrics
        .dispatch_latency_ms_count
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录设备端受理的命令。
pub fn record_command_applied() {
    metrics().commands_applied.fetch_add(1, Ordering::Relaxed);
}

/// 记录设备端拒绝的命令。
pub fn record_command_rejected() {
    metrics().commands_rejected.fetch_add(1, Ordering::Relaxed);
}

/// 记录落库的留言。
pub fn record_message_persisted() {
    metrics().messages_persisted.fetch_add(1, Ordering::Relaxed);
}
