use tapdo_core::{Todo, TodoIdAllocator};

#[test]
fn todo_new_sets_defaults() {
    let todo = Todo::new(1_700_000_000_000, "walk the dog");

    assert_eq!(todo.id, 1_700_000_000_000);
    assert_eq!(todo.text, "walk the dog");
    assert!(!todo.completed);
}

#[test]
fn todo_serialization_uses_expected_wire_fields() {
    let mut todo = Todo::new(42, "ship it");
    todo.toggle();

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], 42);
    assert_eq!(json["text"], "ship it");
    assert_eq!(json["completed"], true);

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn todo_array_roundtrip_preserves_sequence() {
    let todos = vec![
        Todo::new(1, "a"),
        Todo {
            id: 2,
            text: "b".to_string(),
            completed: true,
        },
        Todo::new(3, "c"),
    ];

    let payload = serde_json::to_string(&todos).unwrap();
    let decoded: Vec<Todo> = serde_json::from_str(&payload).unwrap();
    assert_eq!(decoded, todos);
}

#[test]
fn legacy_slot_payload_decodes() {
    // Payload shape written by the original app; no versioning, no
    // migration of older shapes.
    let decoded: Vec<Todo> =
        serde_json::from_str(r#"[{"id":1,"text":"a","completed":true}]"#).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].id, 1);
    assert_eq!(decoded[0].text, "a");
    assert!(decoded[0].completed);
}

#[test]
fn allocator_never_collides_within_one_millisecond() {
    let allocator = TodoIdAllocator::new();
    let mut seen = std::collections::HashSet::new();
    // A tight loop allocates far faster than the wall clock ticks, so
    // this exercises the same-millisecond path.
    for _ in 0..10_000 {
        assert!(seen.insert(allocator.next_id()), "duplicate id allocated");
    }
}
