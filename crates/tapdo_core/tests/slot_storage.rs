use tapdo_core::db::open_db_in_memory;
use tapdo_core::{SlotRepository, SqliteSlotRepository, SAVED_DATA_KEY};

#[test]
fn read_of_absent_slot_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(conn);

    assert_eq!(repo.read_slot(SAVED_DATA_KEY).unwrap(), None);
}

#[test]
fn write_then_read_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(conn);

    repo.write_slot(SAVED_DATA_KEY, r#"[{"id":1,"text":"a","completed":false}]"#)
        .unwrap();

    let stored = repo.read_slot(SAVED_DATA_KEY).unwrap();
    assert_eq!(
        stored.as_deref(),
        Some(r#"[{"id":1,"text":"a","completed":false}]"#)
    );
}

#[test]
fn write_overwrites_prior_value_unconditionally() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(conn);

    repo.write_slot(SAVED_DATA_KEY, "[]").unwrap();
    repo.write_slot(SAVED_DATA_KEY, r#"[{"id":2,"text":"b","completed":true}]"#)
        .unwrap();

    let stored = repo.read_slot(SAVED_DATA_KEY).unwrap();
    assert_eq!(
        stored.as_deref(),
        Some(r#"[{"id":2,"text":"b","completed":true}]"#)
    );
}

#[test]
fn slots_are_independent_per_key() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(conn);

    repo.write_slot("savedData", "[]").unwrap();
    repo.write_slot("other", "{}").unwrap();

    assert_eq!(repo.read_slot("savedData").unwrap().as_deref(), Some("[]"));
    assert_eq!(repo.read_slot("other").unwrap().as_deref(), Some("{}"));
}

#[test]
fn file_backed_slot_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tapdo.sqlite3");

    {
        let conn = tapdo_core::db::open_db(&db_path).unwrap();
        let repo = SqliteSlotRepository::new(conn);
        repo.write_slot(SAVED_DATA_KEY, r#"[{"id":7,"text":"persisted","completed":false}]"#)
            .unwrap();
    }

    let conn = tapdo_core::db::open_db(&db_path).unwrap();
    let repo = SqliteSlotRepository::new(conn);
    let stored = repo.read_slot(SAVED_DATA_KEY).unwrap();
    assert_eq!(
        stored.as_deref(),
        Some(r#"[{"id":7,"text":"persisted","completed":false}]"#)
    );
}
