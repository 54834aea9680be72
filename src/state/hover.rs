//! Transient drag-hover state for the assignment board.
//!
//! DESIGN
//! ======
//! Drag enter/leave events bubble and may arrive out of order when the pointer
//! crosses overlapping regions. Every leave therefore names the id it is
//! leaving and only clears state that still matches, so a late leave from a
//! previous region cannot wipe the region the pointer is now over.
//!
//! The hovered category is only meaningful inside the hovered target: losing
//! the target always clears the category too.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

/// Which target, and which category inside it, the pointer is dragging over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    pub target_id: Option<String>,
    pub assignment_type_id: Option<String>,
}

impl HoverState {
    /// Pointer entered a target card.
    ///
    /// Entering a different target drops the hovered category of the previous one.
    pub fn enter_target(&mut self, target_id: &str) {
        if self.target_id.as_deref() == Some(target_id) {
            return;
        }
        tracing::trace!(target_id, "drag entered target");
        self.target_id = Some(target_id.to_owned());
        self.assignment_type_id = None;
    }

    /// Pointer left a target card. No-op unless `target_id` is the tracked one.
    pub fn leave_target(&mut self, target_id: &str) {
        if self.target_id.as_deref() != Some(target_id) {
            return;
        }
        tracing::trace!(target_id, "drag left target");
        self.target_id = None;
        self.assignment_type_id = None;
    }

    /// Pointer entered the drop cell of a category.
    pub fn enter_assignment_type(&mut self, assignment_type_id: &str) {
        self.assignment_type_id = Some(assignment_type_id.to_owned());
    }

    /// Pointer left a category drop cell. No-op unless it is the tracked one.
    pub fn leave_assignment_type(&mut self, assignment_type_id: &str) {
        if self.assignment_type_id.as_deref() == Some(assignment_type_id) {
            self.assignment_type_id = None;
        }
    }

    pub fn is_target_hovered(&self, target_id: &str) -> bool {
        self.target_id.as_deref() == Some(target_id)
    }

    /// Whether the drop cell for `assignment_type_id` on `target_id` should be highlighted.
    pub fn is_highlighted(&self, target_id: &str, assignment_type_id: &str) -> bool {
        self.is_target_hovered(target_id) && self.assignment_type_id.as_deref() == Some(assignment_type_id)
    }
}
