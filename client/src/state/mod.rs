//! Client state modules.
//!
//! ARCHITECTURE
//! ============
//! State types are plain Rust values with no DOM access. Components wrap them
//! in `RwSignal`s and render from their accessors, which keeps every rule
//! testable without a browser.

pub mod fields;
pub mod registration;
pub mod reveal;
