//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read caller-owned values through signals and report edits back
//! through callbacks; they never write to caller state directly.

pub mod drag_assignment;
