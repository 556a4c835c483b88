//! 留言内存存储实现

use crate::error::StorageError;
use crate::models::{MessageRecord, MutationOutcome, local_now};
use crate::traits::MessageStore;
use std::sync::RwLock;

struct MessageTable {
    rows: Vec<MessageRecord>,
    next_id: i64,
}

/// 留言内存存储
pub struct InMemoryMessageStore {
    table: RwLock<MessageTable>,
}

impl InMemoryMessageStore {
    /// 创建新的留言存储
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MessageTable {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn create_message(
        &self,
        text: &str,
        author: &str,
    ) -> Result<MessageRecord, StorageError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StorageError::lock_failed())?;
        let record = MessageRecord {
            id: table.next_id,
            text: text.to_string(),
            created_at: local_now(),
            author: author.to_string(),
        };
        table.next_id += 1;
        table.rows.push(record.clone());
        Ok(record)
    }

    async fn list_messages(&self) -> Result<Vec<MessageRecord>, StorageError> {
        let table = self
            .table
            .read()
            .map_err(|_| StorageError::lock_failed())?;
        Ok(table.rows.clone())
    }

    async fn update_message(&self, id: i64, text: &str) -> Result<MutationOutcome, StorageError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StorageError::lock_failed())?;
        match table.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.text = text.to_string();
                Ok(MutationOutcome::Applied)
            }
            None => Ok(MutationOutcome::NoOp),
        }
    }

    async fn delete_message(&self, id: i64) -> Result<MutationOutcome, StorageError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StorageError::lock_failed())?;
        let Some(index) = table.rows.iter().position(|row| row.id == id) else {
            return Ok(MutationOutcome::NoOp);
        };
        table.rows.remove(index);
        Ok(MutationOutcome::Applied)
    }
}
