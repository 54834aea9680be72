//! # drag-assignment
//!
//! Leptos drag-and-drop board for assigning source items onto targets,
//! grouped by caller-defined categories.
//!
//! The crate contains the [`DragAssignment`] component, the assignment data
//! model and its transitions, the hover state machine, and a small helper for
//! composing conditional class strings.
//!
//! The server-side render tests in `tests/render.rs` need the `ssr` feature:
//! `cargo test --features ssr`.
//!
//! [`DragAssignment`]: components::drag_assignment::DragAssignment

pub mod components;
pub mod state;
pub mod util;
