use std::collections::HashSet;
use todotasks_core::db::open_db_in_memory;
use todotasks_core::{NewTodo, SqliteTodoStore, StoreError, TodoStore};

fn empty_store() -> SqliteTodoStore {
    SqliteTodoStore::open_in_memory().unwrap()
}

fn insert_task(store: &mut SqliteTodoStore, title: &str) -> i64 {
    store.insert(&NewTodo::new(title).unwrap()).unwrap()
}

#[test]
fn insert_assigns_unique_ids_and_roundtrips() {
    let mut store = empty_store();

    let first = insert_task(&mut store, "first task");
    let second = insert_task(&mut store, "second task");
    assert_ne!(first, second);

    let loaded = store.get(first).unwrap().unwrap();
    assert_eq!(loaded.id, first);
    assert_eq!(loaded.title, "first task");
    assert!(!loaded.is_checked);
}

#[test]
fn insert_stores_trimmed_title() {
    let mut store = empty_store();

    let id = store.insert(&NewTodo::new("  padded  ").unwrap()).unwrap();

    let loaded = store.get(id).unwrap().unwrap();
    assert_eq!(loaded.title, "padded");
}

#[test]
fn insert_rejects_blank_title() {
    let mut store = empty_store();

    let blank = NewTodo {
        title: "   ".to_string(),
    };
    let err = store.insert(&blank).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.get_all().unwrap().is_empty());
}

#[test]
fn delete_removes_only_the_target_row() {
    let mut store = empty_store();

    let keep = insert_task(&mut store, "keep");
    let remove = insert_task(&mut store, "remove");

    store.delete(remove).unwrap();

    let remaining = store.get_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep);
}

#[test]
fn delete_missing_id_is_not_found_and_preserves_rows() {
    let mut store = empty_store();

    let id = insert_task(&mut store, "survivor");

    let err = store.delete(id + 100).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(missing) if missing == id + 100));

    let remaining = store.get_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, id);
}

#[test]
fn set_checked_persists_the_flag() {
    let mut store = empty_store();

    let id = insert_task(&mut store, "toggle me");
    store.set_checked(id, true).unwrap();
    assert!(store.get(id).unwrap().unwrap().is_checked);

    store.set_checked(id, false).unwrap();
    assert!(!store.get(id).unwrap().unwrap().is_checked);
}

#[test]
fn set_checked_missing_id_is_not_found() {
    let mut store = empty_store();

    let err = store.set_checked(41, true).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(41)));
}

#[test]
fn clear_checked_removes_exactly_the_checked_rows() {
    let mut store = empty_store();

    let unchecked_a = insert_task(&mut store, "still open");
    let checked_a = insert_task(&mut store, "done one");
    let checked_b = insert_task(&mut store, "done two");
    store.set_checked(checked_a, true).unwrap();
    store.set_checked(checked_b, true).unwrap();

    let removed: HashSet<i64> = store.clear_checked().unwrap().into_iter().collect();
    assert_eq!(removed, HashSet::from([checked_a, checked_b]));

    let remaining = store.get_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, unchecked_a);
    assert_eq!(remaining[0].title, "still open");
    assert!(!remaining[0].is_checked);
}

#[test]
fn clear_checked_with_nothing_checked_removes_nothing() {
    let mut store = empty_store();

    insert_task(&mut store, "open task");

    assert!(store.clear_checked().unwrap().is_empty());
    assert_eq!(store.get_all().unwrap().len(), 1);
}

#[test]
fn get_all_is_idempotent_without_mutation() {
    let mut store = empty_store();

    insert_task(&mut store, "one");
    insert_task(&mut store, "two");

    let first = store.get_all().unwrap();
    let second = store.get_all().unwrap();
    assert_eq!(first, second);
}

#[test]
fn corrupt_checked_value_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO todo (title, isChecked) VALUES ('broken row', 7);",
        [],
    )
    .unwrap();

    let store = SqliteTodoStore::new(conn);
    let err = store.get_all().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[test]
fn empty_persisted_title_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    conn.execute("INSERT INTO todo (title, isChecked) VALUES ('', 0);", [])
        .unwrap();

    let store = SqliteTodoStore::new(conn);
    let err = store.get_all().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}
