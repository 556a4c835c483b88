use ledfleet_config::{AppConfig, ConfigError, StorageMode};

// 环境变量是进程级共享状态，所有断言放在同一个测试里顺序执行。
#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::remove_var("LEDFLEET_HTTP_ADDR");
        std::env::remove_var("LEDFLEET_STORAGE");
        std::env::remove_var("LEDFLEET_DISPATCH_TIMEOUT_MS");
        std::env::remove_var("LEDFLEET_SCROLL_SPEED");
        std::env::remove_var("LEDFLEET_ADAPTER_ENABLED");
    }
    let config = AppConfig::from_env().expect("defaults");
    assert_eq!(config.http_addr, "0.0.0.0:8000");
    assert_eq!(config.storage_mode, StorageMode::Sqlite);
    assert_eq!(config.dispatch_timeout_ms, 5000);
    assert!(config.adapter_enabled);

    unsafe {
        std::env::set_var("LEDFLEET_HTTP_ADDR", "127.0.0.1:8081");
        std::env::set_var("LEDFLEET_STORAGE", "memory");
        std::env::set_var("LEDFLEET_DISPATCH_TIMEOUT_MS", "250");
        std::env::set_var("LEDFLEET_SCROLL_SPEED", "0.05");
        std::env::set_var("LEDFLEET_ADAPTER_ENABLED", "false");
    }
    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.http_addr, "127.0.0.1:8081");
    assert_eq!(config.storage_mode, StorageMode::Memory);
    assert_eq!(config.dispatch_timeout_ms, 250);
    assert!((config.scroll_speed - 0.05).abs() < f64::EPSILON);
    assert!(!config.adapter_enabled);

    unsafe {
        std::env::set_var("LEDFLEET_DISPATCH_TIMEOUT_MS", "0");
    }
    assert!(matches!(
        AppConfig::from_env(),
        Err(ConfigError::Invalid(key, _)) if key == "LEDFLEET_DISPATCH_TIMEOUT_MS"
    ));

    unsafe {
        std::env::set_var("LEDFLEET_DISPATCH_TIMEOUT_MS", "250");
        std::env::set_var("LEDFLEET_STORAGE", "postgres");
    }
    assert!(matches!(
        AppConfig::from_env(),
        Err(ConfigError::Invalid(key, value)) if key == "LEDFLEET_STORAGE" && value == "postgres"
    ));

    unsafe {
        std::env::set_var("LEDFLEET_STORAGE", "sqlite");
        std::env::set_var("LEDFLEET_SCROLL_SPEED", "-1");
    }
    assert!(matches!(
        AppConfig::from_env(),
        Err(ConfigError::Invalid(key, _)) if key == "LEDFLEET_SCROLL_SPEED"
    ));
}
