//! FFI crate exposing the tapdo core to the mobile UI.

pub mod api;
