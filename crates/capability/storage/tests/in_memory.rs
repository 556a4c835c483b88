mod common;

use ledfleet_storage::{InMemoryDeviceStore, InMemoryMessageStore};

#[tokio::test]
async fn device_add_list_remove() {
    common::device_add_list_remove(&InMemoryDeviceStore::new()).await;
}

#[tokio::test]
async fn device_remove_absent_is_noop() {
    common::device_remove_absent_is_noop(&InMemoryDeviceStore::new()).await;
}

#[tokio::test]
async fn device_duplicates_keep_registration_order() {
    common::device_duplicates_keep_registration_order(&InMemoryDeviceStore::new()).await;
}

#[tokio::test]
async fn message_update_keeps_author_and_created_at() {
    common::message_update_keeps_author_and_created_at(&InMemoryMessageStore::new()).await;
}

#[tokio::test]
async fn message_absent_ids_are_noops() {
    common::message_absent_ids_are_noops(&InMemoryMessageStore::new()).await;
}

#[tokio::test]
async fn message_list_keeps_insertion_order() {
    common::message_list_keeps_insertion_order(&InMemoryMessageStore::new()).await;
}
