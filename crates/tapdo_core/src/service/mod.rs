//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations, slot persistence and notifications into
//!   the screen-level use cases.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod todo_screen;
