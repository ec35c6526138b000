//! Ordered todo collection and its four mutations.
//!
//! # Responsibility
//! - Append, toggle, delete and bulk-load todo records.
//! - Track a revision counter so observers can detect real changes.
//!
//! # Invariants
//! - Toggle/delete locate the first match by linear scan; an unknown id
//!   is a benign no-op, never an error.
//! - `revision` advances only when the collection actually changed, so a
//!   no-op mutation does not re-trigger persistence.
//! - No validation, no dedup: identity discipline lives with the id
//!   allocator, not here.

use crate::model::todo::{Todo, TodoId};

/// Authoritative in-memory collection of todo records.
///
/// Constructed explicitly at startup and passed by reference to whatever
/// needs it; there is no hidden process-wide instance.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    revision: u64,
}

impl TodoStore {
    /// Creates an empty store at revision zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Full ordered collection, insertion order preserved.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Change counter; advances by one per effective mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends one record to the end of the collection. Always succeeds.
    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
        self.revision += 1;
    }

    /// Flips `completed` on the first record matching `id`.
    ///
    /// Returns whether a record was found; an unknown id leaves the
    /// collection and the revision untouched.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.toggle();
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Removes exactly the first record matching `id`, preserving the
    /// relative order of the remaining records.
    ///
    /// Returns whether a record was removed.
    pub fn delete(&mut self, id: TodoId) -> bool {
        match self.todos.iter().position(|todo| todo.id == id) {
            Some(index) => {
                self.todos.remove(index);
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Appends every record of `todos`, in order, to the end of the
    /// collection.
    ///
    /// This is an append, not a replace, and performs no dedup against
    /// existing content. Intended to run once at startup while the store
    /// is still empty.
    pub fn load(&mut self, todos: Vec<Todo>) {
        if todos.is_empty() {
            return;
        }
        self.todos.extend(todos);
        self.revision += 1;
    }

    /// Largest id currently present, if any. Used to seed the id
    /// allocator after a restore.
    pub fn max_id(&self) -> Option<TodoId> {
        self.todos.iter().map(|todo| todo.id).max()
    }
}
