use tapdo_core::{Todo, TodoStore};

#[test]
fn size_after_n_adds_equals_n_in_insertion_order() {
    let mut store = TodoStore::new();
    for id in 0..100 {
        store.add(Todo::new(id, format!("todo {id}")));
    }

    assert_eq!(store.len(), 100);
    for (index, todo) in store.todos().iter().enumerate() {
        assert_eq!(todo.id, index as i64);
    }
}

#[test]
fn toggle_twice_restores_original_flag() {
    let mut store = TodoStore::new();
    store.add(Todo::new(1, "a"));

    assert!(store.toggle(1));
    assert!(store.todos()[0].completed);
    assert!(store.toggle(1));
    assert!(!store.todos()[0].completed);
}

#[test]
fn toggle_and_delete_unknown_id_leave_collection_unchanged() {
    let mut store = TodoStore::new();
    store.add(Todo::new(1, "a"));
    store.add(Todo::new(2, "b"));
    let before: Vec<Todo> = store.todos().to_vec();

    assert!(!store.toggle(3));
    assert!(!store.delete(3));

    assert_eq!(store.todos(), before.as_slice());
}

#[test]
fn delete_removes_one_record_and_keeps_relative_order() {
    let mut store = TodoStore::new();
    for id in 1..=4 {
        store.add(Todo::new(id, format!("todo {id}")));
    }

    assert!(store.delete(2));

    assert_eq!(store.len(), 3);
    let ids: Vec<i64> = store.todos().iter().map(|todo| todo.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn load_appends_in_order_without_dedup() {
    let mut store = TodoStore::new();
    store.add(Todo::new(1, "existing"));

    // Load does not deduplicate against already-present ids; current
    // product behavior is preserved as-is.
    store.load(vec![Todo::new(1, "loaded dup"), Todo::new(2, "loaded")]);

    assert_eq!(store.len(), 3);
    let ids: Vec<i64> = store.todos().iter().map(|todo| todo.id).collect();
    assert_eq!(ids, vec![1, 1, 2]);
    assert_eq!(store.todos()[1].text, "loaded dup");
}

#[test]
fn add_toggle_toggle_delete_scenario() {
    let mut store = TodoStore::new();
    store.add(Todo::new(10, "milk"));
    assert_eq!(store.todos(), &[Todo::new(10, "milk")]);

    store.toggle(10);
    assert!(store.todos()[0].completed);

    store.toggle(10);
    assert!(!store.todos()[0].completed);

    store.delete(10);
    assert!(store.is_empty());
}

#[test]
fn revision_counts_effective_mutations_only() {
    let mut store = TodoStore::new();
    assert_eq!(store.revision(), 0);

    store.add(Todo::new(1, "a"));
    store.toggle(1);
    store.toggle(99);
    store.delete(99);
    store.load(Vec::new());
    store.delete(1);

    assert_eq!(store.revision(), 3);
}
