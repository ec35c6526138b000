//! Domain model for the to-do screen.
//!
//! # Responsibility
//! - Define the canonical todo record shared by store, storage and UI.
//! - Provide collision-free id allocation for new records.
//!
//! # Invariants
//! - `TodoId` is the sole identity key used for toggle/delete lookup.
//! - Serialized shape is exactly `{id, text, completed}`: the persisted
//!   slot contract.

pub mod todo;
