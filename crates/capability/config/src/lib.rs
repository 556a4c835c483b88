//! 应用运行配置加载。

use std::env;
use std::str::FromStr;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 存储后端。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Sqlite,
    Memory,
}

impl FromStr for StorageMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub database_url: String,
    pub storage_mode: StorageMode,
    /// 单设备下发超时（毫秒）
    pub dispatch_timeout_ms: u64,
    /// 文字滚动速度（秒 / 步）
    pub scroll_speed: f64,
    /// 是否挂载设备端命令接口
    pub adapter_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite://messages.db".to_string(),
            storage_mode: StorageMode::Sqlite,
            dispatch_timeout_ms: 5000,
            scroll_speed: 0.1,
            adapter_enabled: true,
        }
    }
}

impl AppConfig {
    /// 从环境变量读取配置，未设置的项取默认值。
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let http_addr = env::var("LEDFLEET_HTTP_ADDR").unwrap_or(defaults.http_addr);
        let database_url = env::var("LEDFLEET_DATABASE_URL").unwrap_or(defaults.database_url);
        let storage_mode = read_with_default("LEDFLEET_STORAGE", defaults.storage_mode)?;
        let dispatch_timeout_ms =
            read_with_default("LEDFLEET_DISPATCH_TIMEOUT_MS", defaults.dispatch_timeout_ms)?;
        if dispatch_timeout_ms == 0 {
            return Err(invalid("LEDFLEET_DISPATCH_TIMEOUT_MS", "0"));
        }
        let scroll_speed = read_with_default("LEDFLEET_SCROLL_SPEED", defaults.scroll_speed)?;
        if !(scroll_speed.is_finite() && scroll_speed > 0.0) {
            return Err(invalid("LEDFLEET_SCROLL_SPEED", &scroll_speed.to_string()));
        }
        let adapter_enabled =
            read_bool_with_default("LEDFLEET_ADAPTER_ENABLED", defaults.adapter_enabled);

        Ok(Self {
            http_addr,
            database_url,
            storage_mode,
            dispatch_timeout_ms,
            scroll_speed,
            adapter_enabled,
        })
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::Invalid(key.to_string(), value.to_string())
}

fn read_with_default<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_bool_with_default(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"),
        Err(_) => default,
    }
}
