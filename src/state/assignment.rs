//! Assignment data model and the transitions the board performs on it.
//!
//! DESIGN
//! ======
//! The caller owns the target list. Every change produces a new list: targets
//! and category lists are held behind `Arc`, so a removal rebuilds only the
//! touched target and category while every other entry keeps its identity.
//!
//! Nothing here depends on Leptos, which keeps the transitions testable without
//! a reactive runtime.

#[cfg(test)]
#[path = "assignment_test.rs"]
mod assignment_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Full board value: the ordered list of targets.
pub type TargetList<T, S> = Vec<Arc<AssignmentTarget<T, S>>>;

/// Predicate deciding whether a category is offered on a target.
pub type AvailabilityCheck<T, S> = Arc<dyn Fn(&AssignmentTarget<T, S>) -> bool + Send + Sync>;

/// Predicate deciding whether an assignable may be placed on a target.
pub type AssignCheck<T, S> = Arc<dyn Fn(&AssignmentTarget<T, S>, &Assignable<S>) -> bool + Send + Sync>;

/// A unit that can be placed onto a target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignable<S> {
    pub id: String,
    pub name: String,
    pub original: S,
}

impl<S> Assignable<S> {
    pub fn new(id: impl Into<String>, name: impl Into<String>, original: S) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            original,
        }
    }
}

/// A destination holding assignables grouped by category id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignmentTarget<T, S> {
    pub id: String,
    pub name: String,
    pub original: T,
    pub assignments: HashMap<String, Arc<[Assignable<S>]>>,
}

impl<T, S> AssignmentTarget<T, S> {
    pub fn new(id: impl Into<String>, name: impl Into<String>, original: T) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            original,
            assignments: HashMap::new(),
        }
    }

    /// Set the assigned list for one category.
    #[must_use]
    pub fn with_assignments(mut self, assignment_type_id: impl Into<String>, assigned: Vec<Assignable<S>>) -> Self {
        self.assignments.insert(assignment_type_id.into(), Arc::from(assigned));
        self
    }

    /// Items assigned under `assignment_type_id`; empty when the category is absent.
    pub fn assigned(&self, assignment_type_id: &str) -> &[Assignable<S>] {
        self.assignments
            .get(assignment_type_id)
            .map(|assigned| &assigned[..])
            .unwrap_or_default()
    }
}

/// One assignment category and the rules governing it.
///
/// Supplied by the caller. Both predicates default to always-true.
pub struct AssignmentTypeConfig<T, S> {
    pub id: String,
    pub name: String,
    /// Prompt shown in the empty drop cell while a target is hovered.
    pub add_text: String,
    pub check_can_assign: AssignCheck<T, S>,
    pub check_available: AvailabilityCheck<T, S>,
}

impl<T, S> AssignmentTypeConfig<T, S> {
    pub fn new(id: impl Into<String>, name: impl Into<String>, add_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            add_text: add_text.into(),
            check_can_assign: Arc::new(|_, _| true),
            check_available: Arc::new(|_| true),
        }
    }

    #[must_use]
    pub fn with_check_available<F>(mut self, check: F) -> Self
    where
        F: Fn(&AssignmentTarget<T, S>) -> bool + Send + Sync + 'static,
    {
        self.check_available = Arc::new(check);
        self
    }

    #[must_use]
    pub fn with_check_can_assign<F>(mut self, check: F) -> Self
    where
        F: Fn(&AssignmentTarget<T, S>, &Assignable<S>) -> bool + Send + Sync + 'static,
    {
        self.check_can_assign = Arc::new(check);
        self
    }

    pub fn is_available(&self, target: &AssignmentTarget<T, S>) -> bool {
        (self.check_available)(target)
    }

    pub fn can_assign(&self, target: &AssignmentTarget<T, S>, assignable: &Assignable<S>) -> bool {
        (self.check_can_assign)(target, assignable)
    }
}

impl<T, S> Clone for AssignmentTypeConfig<T, S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            add_text: self.add_text.clone(),
            check_can_assign: Arc::clone(&self.check_can_assign),
            check_available: Arc::clone(&self.check_available),
        }
    }
}

impl<T, S> fmt::Debug for AssignmentTypeConfig<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssignmentTypeConfig")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("add_text", &self.add_text)
            .finish_non_exhaustive()
    }
}

/// Caller contract violations detected while editing the target list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignmentError {
    #[error("target not found: {0}")]
    UnknownTarget(String),
    #[error("assignment type {assignment_type_id} not present on target {target_id}")]
    UnknownAssignmentType {
        target_id: String,
        assignment_type_id: String,
    },
}

/// Categories offered on `target`, in config order.
pub fn visible_assignment_types<'c, T, S>(
    target: &AssignmentTarget<T, S>,
    configs: &'c [AssignmentTypeConfig<T, S>],
) -> Vec<&'c AssignmentTypeConfig<T, S>> {
    configs.iter().filter(|config| config.is_available(target)).collect()
}

/// Remove one assignable from one category of one target.
///
/// Returns a new list with the target at the same index replaced. Sibling
/// targets and sibling categories are shared with `value`. An `assignable_id`
/// that is not in the category yields a list equal to `value`.
///
/// # Errors
///
/// [`AssignmentError::UnknownTarget`] when no target has `target_id`, and
/// [`AssignmentError::UnknownAssignmentType`] when the target carries no list
/// for `assignment_type_id`.
pub fn remove_assignment<T, S>(
    value: &[Arc<AssignmentTarget<T, S>>],
    target_id: &str,
    assignment_type_id: &str,
    assignable_id: &str,
) -> Result<TargetList<T, S>, AssignmentError>
where
    T: Clone,
    S: Clone,
{
    let index = value
        .iter()
        .position(|target| target.id == target_id)
        .ok_or_else(|| AssignmentError::UnknownTarget(target_id.to_owned()))?;
    let target = &value[index];

    let assigned = target
        .assignments
        .get(assignment_type_id)
        .ok_or_else(|| AssignmentError::UnknownAssignmentType {
            target_id: target_id.to_owned(),
            assignment_type_id: assignment_type_id.to_owned(),
        })?;
    let remaining = assigned
        .iter()
        .filter(|assignable| assignable.id != assignable_id)
        .cloned()
        .collect::<Arc<[_]>>();

    let mut assignments = target.assignments.clone();
    assignments.insert(assignment_type_id.to_owned(), remaining);

    let mut next = value.to_vec();
    next[index] = Arc::new(AssignmentTarget {
        id: target.id.clone(),
        name: target.name.clone(),
        original: target.original.clone(),
        assignments,
    });
    Ok(next)
}
