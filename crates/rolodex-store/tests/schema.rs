use rolodex_core::parse_record;
use rolodex_store::{paths, Store};
use tempfile::TempDir;

#[test]
fn ensure_schema_is_idempotent() {
    let store = Store::open_in_memory().expect("open in memory");
    store.ensure_schema().expect("schema");
    store.ensure_schema().expect("schema again");

    let tables: i64 = store
        .connection()
        .query_row(
            "SELECT COUNT(1) FROM sqlite_master WHERE type = 'table' AND name = 'Contacts';",
            [],
            |row| row.get(0),
        )
        .expect("table count");
    assert_eq!(tables, 1);
}

#[test]
fn file_store_persists_between_opens() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = paths::db_path_in(temp.path());

    {
        let store = Store::open(&db_path).expect("open");
        store.ensure_schema().expect("schema");
        store
            .contacts()
            .create(parse_record("Ada,111,,").expect("parse"))
            .expect("create");
    }

    let store = Store::open(&db_path).expect("reopen");
    store.ensure_schema().expect("schema");
    let contacts = store.contacts().list_all().expect("list");
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "ada");
}

#[cfg(unix)]
#[test]
fn file_store_is_private_to_owner() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().expect("temp dir");
    let db_path = paths::db_path_in(temp.path());
    let store = Store::open(&db_path).expect("open");
    store.ensure_schema().expect("schema");

    let mode = std::fs::metadata(&db_path)
        .expect("metadata")
        .permissions()
        .mode();
    assert_eq!(mode & 0o077, 0);
}

#[test]
fn resolve_db_path_creates_missing_parent() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("nested").join("contacts.sqlite3");
    let resolved = paths::resolve_db_path(Some(db_path.clone())).expect("resolve");
    assert_eq!(resolved, db_path);
    assert!(temp.path().join("nested").is_dir());
}

#[test]
fn file_store_uses_write_ahead_log() {
    let temp = TempDir::new().expect("temp dir");
    let store = Store::open(&paths::db_path_in(temp.path())).expect("open");

    let mode: String = store
        .connection()
        .query_row("PRAGMA journal_mode;", [], |row| row.get(0))
        .expect("journal mode");
    assert_eq!(mode.to_lowercase(), "wal");
    let timeout: i64 = store
        .connection()
        .query_row("PRAGMA busy_timeout;", [], |row| row.get(0))
        .expect("busy timeout");
    assert_eq!(timeout, 2000);
}
