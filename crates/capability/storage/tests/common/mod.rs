//! 两种存储实现共用的行为检查。

use ledfleet_storage::{DeviceStore, MessageStore, MutationOutcome};

pub async fn device_add_list_remove(store: &dyn DeviceStore) {
    assert!(store.list_devices().await.expect("empty list").is_empty());

    let device = store.add_device("h", "1234").await.expect("add");
    let list = store.list_devices().await.expect("list");
    assert_eq!(list, vec![device.clone()]);
    assert_eq!(list[0].hostname, "h");
    assert_eq!(list[0].port, "1234");

    let outcome = store.remove_device(device.id).await.expect("remove");
    assert_eq!(outcome, MutationOutcome::Applied);
    assert!(store.list_devices().await.expect("list").is_empty());
}

pub async fn device_remove_absent_is_noop(store: &dyn DeviceStore) {
    let kept = store.add_device("pi4", "8000").await.expect("add");
    let before = store.list_devices().await.expect("list");

    let outcome = store.remove_device(kept.id + 1000).await.expect("remove absent");
    assert_eq!(outcome, MutationOutcome::NoOp);
    assert!(!outcome.is_applied());
    assert_eq!(store.list_devices().await.expect("list"), before);
}

pub async fn device_duplicates_keep_registration_order(store: &dyn DeviceStore) {
    let first = store.add_device("same", "8000").await.expect("add");
    let second = store.add_device("same", "8000").await.expect("add");
    let third = store.add_device("other", "9000").await.expect("add");
    assert_ne!(first.id, second.id);

    let ids: Vec<i64> = store
        .list_devices()
        .await
        .expect("list")
        .into_iter()
        .map(|device| device.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    let found = store.find_device(second.id).await.expect("find");
    assert_eq!(found, Some(second.clone()));
    store.remove_device(second.id).await.expect("remove");
    assert_eq!(store.find_device(second.id).await.expect("find"), None);
}

pub async fn message_update_keeps_author_and_created_at(store: &dyn MessageStore) {
    let created = store.create_message("hi", "alice").await.expect("create");
    let outcome = store.update_message(created.id, "bye").await.expect("update");
    assert_eq!(outcome, MutationOutcome::Applied);

    let list = store.list_messages().await.expect("list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, created.id);
    assert_eq!(list[0].text, "bye");
    assert_eq!(list[0].author, "alice");
    assert_eq!(list[0].created_at, created.created_at);
}

pub async fn message_absent_ids_are_noops(store: &dyn MessageStore) {
    let created = store.create_message("keep", "bob").await.expect("create");
    let absent = created.id + 1000;

    assert_eq!(
        store.update_message(absent, "x").await.expect("update"),
        MutationOutcome::NoOp
    );
    assert_eq!(
        store.delete_message(absent).await.expect("delete"),
        MutationOutcome::NoOp
    );
    let list = store.list_messages().await.expect("list");
    assert_eq!(list, vec![created.clone()]);

    assert_eq!(
        store.delete_message(created.id).await.expect("delete"),
        MutationOutcome::Applied
    );
    assert!(store.list_messages().await.expect("list").is_empty());
}

pub async fn message_list_keeps_insertion_order(store: &dyn MessageStore) {
    let first = store.create_message("", "").await.expect("empty text allowed");
    let second = store.create_message("second", "carol").await.expect("create");
    let texts: Vec<(i64, String)> = store
        .list_messages()
        .await
        .expect("list")
        .into_iter()
        .map(|message| (message.id, message.text))
        .collect();
    assert_eq!(
        texts,
        vec![(first.id, "".to_string()), (second.id, "second".to_string())]
    );
}
