//! LED Fleet HTTP 服务：设备端命令接口、管理接口与控制端下发接口。
//!
//! 同一个二进制既可作为控制端（登记设备、向设备下发），也可作为设备端
//! （接收命令驱动本机点阵）。存储与显示句柄在启动时创建并注入，停机时关闭连接池。

mod handlers;
mod middleware;
mod routes;
mod utils;

use ledfleet_adapter::LocalDeviceAdapter;
use ledfleet_config::{AppConfig, StorageMode};
use ledfleet_control::{DispatchConfig, DispatchController, HttpTransport};
use ledfleet_display::VirtualDisplay;
use ledfleet_storage::{
    DeviceStore, InMemoryDeviceStore, InMemoryMessageStore, MessageStore, SqliteDeviceStore,
    SqliteMessageStore, StorageError, open_pool,
};
use ledfleet_telemetry::init_tracing;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub device_store: Arc<dyn DeviceStore>,
    pub message_store: Arc<dyn MessageStore>,
    pub adapter: Arc<LocalDeviceAdapter>,
    pub controller: DispatchController,
}

struct Stores {
    devices: Arc<dyn DeviceStore>,
    messages: Arc<dyn MessageStore>,
    pool: Option<SqlitePool>,
}

async fn open_stores(config: &AppConfig) -> Result<Stores, StorageError> {
    match config.storage_mode {
        StorageMode::Sqlite => {
            // 建表幂等：messages / hosts
            let pool = open_pool(&config.database_url).await?;
            Ok(Stores {
                devices: Arc::new(SqliteDeviceStore::new(pool.clone())),
                messages: Arc::new(SqliteMessageStore::new(pool.clone())),
                pool: Some(pool),
            })
        }
        StorageMode::Memory => Ok(Stores {
            devices: Arc::new(InMemoryDeviceStore::new()),
            messages: Arc::new(InMemoryMessageStore::new()),
            pool: None,
        }),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let stores = open_stores(&config).await?;
    // 本机点阵（无头帧缓冲）
    let display = Arc::new(VirtualDisplay::new());
    let adapter = Arc::new(LocalDeviceAdapter::new(
        display,
        stores.messages.clone(),
        config.scroll_speed,
    ));
    let controller = DispatchController::new_with_config(
        stores.devices.clone(),
        Arc::new(HttpTransport::new()?),
        DispatchConfig {
            timeout_ms: config.dispatch_timeout_ms,
        },
    );
    let state = AppState {
        device_store: stores.devices,
        message_store: stores.messages,
        adapter,
        controller,
    };

    let app = routes::build_app(state, config.adapter_enabled);
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!(
        addr = %config.http_addr,
        storage = ?config.storage_mode,
        adapter_enabled = config.adapter_enabled,
        "ledfleet_api_listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = stores.pool {
        pool.close().await;
    }
    info!("ledfleet_api_stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "shutdown_signal_failed");
    }
}
