//! Utility helpers shared by the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Styling concerns live here so the component only decides which hooks apply,
//! never what they look like.

pub mod class_names;
pub mod style_hooks;
