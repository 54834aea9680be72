//! Named style hooks for the assignment board.
//!
//! DESIGN
//! ======
//! The widget only names its hooks; the stylesheet defining them belongs to the
//! host application. Defaults follow the `block__element--modifier` scheme, and
//! a host may override any subset from its own config file since every field
//! falls back to its default when absent.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "style_hooks_test.rs"]
mod style_hooks_test;

/// Class names applied to each part of the [`DragAssignment`] layout.
///
/// [`DragAssignment`]: crate::components::drag_assignment::DragAssignment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragAssignmentStyles {
    pub root: String,
    pub list: String,
    pub list_title: String,
    pub list_content: String,
    pub card: String,
    pub target: String,
    pub title: String,
    pub assignment_type: String,
    pub assignable: String,
    pub name: String,
    pub delete_button: String,
    pub add_assignment: String,
    pub highlighted: String,
}

impl Default for DragAssignmentStyles {
    fn default() -> Self {
        Self {
            root: "drag-assignment".to_owned(),
            list: "drag-assignment__list".to_owned(),
            list_title: "drag-assignment__list-title".to_owned(),
            list_content: "drag-assignment__list-content".to_owned(),
            card: "drag-assignment__card".to_owned(),
            target: "drag-assignment__target".to_owned(),
            title: "drag-assignment__title".to_owned(),
            assignment_type: "drag-assignment__type".to_owned(),
            assignable: "drag-assignment__assignable".to_owned(),
            name: "drag-assignment__name".to_owned(),
            delete_button: "drag-assignment__delete".to_owned(),
            add_assignment: "drag-assignment__add".to_owned(),
            highlighted: "drag-assignment__add--highlighted".to_owned(),
        }
    }
}
