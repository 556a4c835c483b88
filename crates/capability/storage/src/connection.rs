//! 数据库连接管理
//!
//! - connect_pool：建立 SQLite 连接池（文件不存在时创建）
//! - init_schema：幂等建表
//! - open_pool：连接 + 建表，进程启动时调用一次；停机时调用 `pool.close()`

use crate::error::StorageError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// 建立 SQLite 连接池
///
/// 最大连接数限制为 8；并发写由 SQLite 自身串行化。
pub async fn connect_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// 幂等创建 `messages` 与 `hosts` 表
pub async fn init_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query(
        "create table if not exists messages(\
         id integer primary key, message text, datetime text, author text)",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "create table if not exists hosts(\
         id integer primary key, hostname text, port text)",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// 连接并建表
pub async fn open_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    let pool = connect_pool(database_url).await?;
    init_schema(&pool).await?;
    Ok(pool)
}
