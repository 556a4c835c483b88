//! SQLite 留言存储实现（`messages` 表）
//!
//! 列名沿用历史表结构：文本在 `message` 列，创建时间在 `datetime` 列。

use crate::error::StorageError;
use crate::models::{MessageRecord, MutationOutcome, local_now};
use crate::traits::MessageStore;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct SqliteMessageStore {
    pub pool: SqlitePool,
}

impl SqliteMessageStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = crate::connection::open_pool(database_url).await?;
        Ok(Self { pool })
    }
}

fn message_from_row(row: &SqliteRow) -> Result<MessageRecord, StorageError> {
    Ok(MessageRecord {
        id: row.try_get("id")?,
        text: row.try_get("message")?,
        created_at: row.try_get("datetime")?,
        author: row.try_get("author")?,
    })
}

#[async_trait::async_trait]
impl MessageStore for SqliteMessageStore {
    async fn create_message(
        &self,
        text: &str,
        author: &str,
    ) -> Result<MessageRecord, StorageError> {
        let created_at = local_now();
        let result =
            sqlx::query("insert into messages (message, datetime, author) values (?1, ?2, ?3)")
                .bind(text)
                .bind(created_at)
                .bind(author)
                .execute(&self.pool)
                .await?;
        Ok(MessageRecord {
            id: result.last_insert_rowid(),
            text: text.to_string(),
            created_at,
            author: author.to_string(),
        })
    }

    async fn list_messages(&self) -> Result<Vec<MessageRecord>, StorageError> {
        let rows = sqlx::query("select id, message, datetime, author from messages order by id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(message_from_row).collect()
    }

    async fn update_message(&self, id: i64, text: &str) -> Result<MutationOutcome, StorageError> {
        let result = sqlx::query("update messages set message = ?1 where id = ?2")
            .bind(text)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
    }

    async fn delete_message(&self, id: i64) -> Result<MutationOutcome, StorageError> {
        let result = sqlx::query("delete from messages where id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
    }
}
