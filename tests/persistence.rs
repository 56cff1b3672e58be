//! Round-trip and degradation tests for the SQLite-backed task store.

use tempfile::tempdir;
use ticklist::engine::db::Db;
use ticklist::engine::store::TaskStore;
use ticklist::engine::types::Task;

#[test]
fn fresh_store_loads_empty() {
    let dir = tempdir().unwrap();
    let db = Db::open_at(dir.path().join("tasks.db")).unwrap();
    assert!(db.load().is_empty());
}

#[test]
fn save_then_load_reproduces_the_collection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.db");

    let mut store = TaskStore::default();
    store.add("oldest").unwrap();
    let middle = store.add("middle").unwrap();
    store.add("newest").unwrap();
    store.toggle(&middle.id);

    {
        let db = Db::open_at(&path).unwrap();
        db.save(store.tasks());
    }

    let db = Db::open_at(&path).unwrap();
    let loaded = db.load();
    assert_eq!(loaded, store.tasks());
    assert_eq!(loaded[0].text, "newest");
    assert_eq!(loaded[2].text, "oldest");
    assert!(loaded[1].completed);
}

#[test]
fn save_replaces_the_previous_snapshot() {
    let dir = tempdir().unwrap();
    let db = Db::open_at(dir.path().join("tasks.db")).unwrap();

    let mut store = TaskStore::default();
    let task = store.add("transient").unwrap();
    db.save(store.tasks());

    store.remove(&task.id);
    db.save(store.tasks());

    assert!(db.load().is_empty());
}

#[test]
fn corrupt_payload_resets_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.db");

    {
        let db = Db::open_at(&path).unwrap();
        db.save(&[Task::new("soon to be garbage")]);
    }
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute(
            "UPDATE store SET value = '{not json' WHERE key = 'tasks'",
            [],
        )
        .unwrap();
    }

    let db = Db::open_at(&path).unwrap();
    assert!(db.load().is_empty());
}

#[test]
fn clear_completed_scenario_persists_the_survivor() {
    let dir = tempdir().unwrap();
    let db = Db::open_at(dir.path().join("tasks.db")).unwrap();

    let mut store = TaskStore::default();
    let active = store.add("still open").unwrap();
    let done_a = store.add("shipped").unwrap();
    let done_b = store.add("reviewed").unwrap();
    store.toggle(&done_a.id);
    store.toggle(&done_b.id);
    db.save(store.tasks());

    assert_eq!(store.clear_completed(), 2);
    db.save(store.tasks());

    let loaded = db.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, active.id);
    assert!(!loaded[0].completed);
}
