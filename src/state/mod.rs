//! Widget state modules.
//!
//! DESIGN
//! ======
//! `assignment` holds the caller-owned data model and its transitions; `hover`
//! holds the only state the widget owns itself.

pub mod assignment;
pub mod hover;
