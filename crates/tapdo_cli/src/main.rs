//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tapdo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe validating core crate wiring independently from the
    // mobile FFI runtime setup.
    println!("tapdo_core ping={}", tapdo_core::ping());
    println!("tapdo_core version={}", tapdo_core::core_version());
}
