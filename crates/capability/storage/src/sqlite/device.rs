//! SQLite 设备存储实现（`hosts` 表）

use crate::error::StorageError;
use crate::models::{DeviceRecord, MutationOutcome};
use crate::traits::DeviceStore;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct SqliteDeviceStore {
    pub pool: SqlitePool,
}

impl SqliteDeviceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = crate::connection::open_pool(database_url).await?;
        Ok(Self { pool })
    }
}

fn device_from_row(row: &SqliteRow) -> Result<DeviceRecord, StorageError> {
    Ok(DeviceRecord {
        id: row.try_get("id")?,
        hostname: row.try_get("hostname")?,
        port: row.try_get("port")?,
    })
}

#[async_trait::async_trait]
impl DeviceStore for SqliteDeviceStore {
    async fn add_device(&self, hostname: &str, port: &str) -> Result<DeviceRecord, StorageError> {
        let result = sqlx::query("insert into hosts (hostname, port) values (?1, ?2)")
            .bind(hostname)
            .bind(port)
            .execute(&self.pool)
            .await?;
        Ok(DeviceRecord {
            id: result.last_insert_rowid(),
            hostname: hostname.to_string(),
            port: port.to_string(),
        })
    }

    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, StorageError> {
        let rows = sqlx::query("select id, hostname, port from hosts order by id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(device_from_row).collect()
    }

    async fn find_device(&self, id: i64) -> Result<Option<DeviceRecord>, StorageError> {
        let row = sqlx::query("select id, hostname, port from hosts where id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(device_from_row).transpose()
    }

    async fn remove_device(&self, id: i64) -> Result<MutationOutcome, StorageError> {
        let result = sqlx::query("delete from hosts where id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
    }
}
