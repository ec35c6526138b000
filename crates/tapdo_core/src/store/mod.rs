//! In-memory state store for the to-do screen.
//!
//! # Responsibility
//! - Hold the authoritative ordered collection of todo records.
//! - Expose exactly the four defined mutations plus read access.
//!
//! # Invariants
//! - Insertion order is the only defined order; nothing sorts.
//! - Mutations are synchronous; observers read the collection afterward.

pub mod todo_store;
