//! Durable slot storage abstractions and SQLite implementation.
//!
//! # Responsibility
//! - Define the two-verb key-value slot contract used by persistence.
//! - Isolate SQL details from the screen service orchestration.
//!
//! # Invariants
//! - Reading an absent slot yields `None`, never an error.
//! - Writing overwrites any prior value unconditionally.

pub mod slot_repo;
