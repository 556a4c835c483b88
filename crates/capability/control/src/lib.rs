//! 命令下发：单设备下发与广播。
//!
//! - 校验在任何网络调用之前完成，失败直接返回给调用方
//! - 每台设备一次尝试、独立超时，传输层结果只体现在 [`DispatchResult`] 中
//! - 广播对调用时刻的设备快照并发下发（每台设备一个任务），按登记顺序汇总

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use domain::{DisplayRequest, EncodedCommand, ValidationError};
use ledfleet_storage::{DeviceRecord, DeviceStore, StorageError};
use ledfleet_telemetry::{
    record_dispatch_attempt, record_dispatch_failure, record_dispatch_latency_ms,
    record_dispatch_success,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// 单设备传输错误。
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("timed out after {0} ms")]
    Timeout(u64),
    #[error("device rejected command: {code}: {message}")]
    Rejected { code: String, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// 控制链路错误（只包含调用方需要处理的情况）。
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("unknown device: {0}")]
    UnknownDevice(i64),
}

/// 设备传输抽象。
#[async_trait]
pub trait DeviceTransport: Send + Sync {
    /// 发送一条已编码命令；设备端确认受理时返回 `Ok`。
    async fn send(&self, device: &DeviceRecord, command: &EncodedCommand)
    -> Result<(), TransportError>;
}

/// 单设备下发结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub device: DeviceRecord,
    pub succeeded: bool,
    pub error_detail: Option<String>,
}

impl DispatchResult {
    pub fn success(device: DeviceRecord) -> Self {
        Self {
            device,
            succeeded: true,
            error_detail: None,
        }
    }

    pub fn failure(device: DeviceRecord, detail: impl Into<String>) -> Self {
        Self {
            device,
            succeeded: false,
            error_detail: Some(detail.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// 单设备超时（毫秒）
    pub timeout_ms: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self { timeout_ms: 5000 }
    }
}

/// 下发控制器。
#[derive(Clone)]
pub struct DispatchController {
    devices: Arc<dyn DeviceStore>,
    transport: Arc<dyn DeviceTransport>,
    config: DispatchConfig,
}

impl DispatchController {
    pub fn new(devices: Arc<dyn DeviceStore>, transport: Arc<dyn DeviceTransport>) -> Self {
        Self::new_with_config(devices, transport, DispatchConfig::default())
    }

    pub fn new_with_config(
        devices: Arc<dyn DeviceStore>,
        transport: Arc<dyn DeviceTransport>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            devices,
            transport,
            config,
        }
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.config.timeout_ms)
    }

    /// 向指定设备下发。传输层失败体现在返回的 [`DispatchResult`] 中。
    pub async fn dispatch_to(
        &self,
        device: &DeviceRecord,
        request: DisplayRequest,
    ) -> Result<DispatchResult, ValidationError> {
        let command = request.encode()?;
        Ok(send_one(self.transport.clone(), device.clone(), command, self.timeout()).await)
    }

    /// 按 id 查找设备后下发。
    pub async fn dispatch_to_id(
        &self,
        device_id: i64,
        request: DisplayRequest,
    ) -> Result<DispatchResult, ControlError> {
        let command = request.encode()?;
        let device = self
            .devices
            .find_device(device_id)
            .await?
            .ok_or(ControlError::UnknownDevice(device_id))?;
        Ok(send_one(self.transport.clone(), device, command, self.timeout()).await)
    }

    /// 向所有已登记设备广播，结果顺序与登记顺序一致。
    pub async fn broadcast(
        &self,
        request: DisplayRequest,
    ) -> Result<Vec<DispatchResult>, ControlError> {
        let command = request.encode()?;
        let devices = self.devices.list_devices().await?;
        info!(
            target: "ledfleet.control",
            endpoint = command.endpoint,
            targets = devices.len(),
            "broadcast_started"
        );

        let timeout = self.timeout();
        let tasks: Vec<_> = devices
            .into_iter()
            .map(|device| {
                let handle = tokio::spawn(send_one(
                    self.transport.clone(),
                    device.clone(),
                    command.clone(),
                    timeout,
                ));
                (device, handle)
            })
            .collect();

        let mut results = Vec::with_capacity(tasks.len());
        for (device, handle) in tasks {
            let result = match handle.await {
                Ok(result) => result,
                Err(err) => {
                    record_dispatch_failure();
                    warn!(
                        target: "ledfleet.control",
                        device_id = device.id,
                        error = %err,
                        "dispatch_failed"
                    );
                    DispatchResult::failure(device, format!("dispatch task aborted: {err}"))
                }
            };
            results.push(result);
        }
        Ok(results)
    }
}

async fn send_one(
    transport: Arc<dyn DeviceTransport>,
    device: DeviceRecord,
    command: EncodedCommand,
    timeout: Duration,
) -> DispatchResult {
    record_dispatch_attempt();
    let started_at = Instant::now();
    let outcome = match tokio::time::timeout(timeout, transport.send(&device, &command)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(TransportError::Timeout(
            u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        )),
    };
    let elapsed_ms = u64::try_from(started_at.elapsed().as_millis()).unwrap_or(u64::MAX);
    record_dispatch_latency_ms(elapsed_ms);

    match outcome {
        Ok(()) => {
            record_dispatch_success();
            info!(
                target: "ledfleet.control",
                device_id = device.id,
                address = %device.address(),
                endpoint = command.endpoint,
                "dispatch_sent"
            );
            DispatchResult::success(device)
        }
        Err(err) => {
            record_dispatch_failure();
            warn!(
                target: "ledfleet.control",
                device_id = device.id,
                address = %device.address(),
                endpoint = command.endpoint,
                error = %err,
                "dispatch_failed"
            );
            DispatchResult::failure(device, err.to_string())
        }
    }
}
