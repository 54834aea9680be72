//! Two-column drag-and-drop assignment board.
//!
//! ARCHITECTURE
//! ============
//! The left column renders one card per target with its assigned items grouped
//! by category; the right column is the assignable source list. The caller
//! owns the target list and receives every edit through `on_change`; the board
//! only owns its hover state.
//!
//! Drop commit and drag-source wiring are not implemented: hovering a target
//! reveals a drop cell per category, and entering a cell highlights it.

#[cfg(test)]
#[path = "drag_assignment_test.rs"]
mod drag_assignment_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::assignment::{
    Assignable, AssignmentTarget, AssignmentTypeConfig, TargetList, remove_assignment, visible_assignment_types,
};
use crate::state::hover::HoverState;
use crate::util::class_names::{ClassName, class_names};
use crate::util::style_hooks::DragAssignmentStyles;

/// Assignment board over `value`, grouped by `assignment_type_config`.
#[component]
pub fn DragAssignment<T, S>(
    /// Categories rendered inside each target card, in order.
    assignment_type_config: Vec<AssignmentTypeConfig<T, S>>,
    /// Current targets. Never mutated; edits go through `on_change`.
    #[prop(into)]
    value: Signal<TargetList<T, S>>,
    /// Assignable source items. Not yet rendered.
    #[prop(into)]
    options: Signal<Vec<Assignable<S>>>,
    /// Receives the full replacement target list after a removal.
    on_change: Callback<TargetList<T, S>>,
    #[prop(into)] target_list_title: String,
    #[prop(into)] assignable_list_title: String,
    #[prop(optional)] styles: Option<DragAssignmentStyles>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
{
    let styles = StoredValue::new(styles.unwrap_or_default());
    let configs = StoredValue::new(assignment_type_config);
    let hover = RwSignal::new(HoverState::default());

    let remove = move |target_id: String, assignment_type_id: String, assignable_id: String| {
        remove_and_notify(value, on_change, &target_id, &assignment_type_id, &assignable_id);
    };

    let targets = move || {
        value
            .get()
            .into_iter()
            .map(|target| render_target(target, configs, styles, hover, remove))
            .collect_view()
    };

    let hooks = styles.get_value();
    view! {
        <div class=hooks.root.clone()>
            <div class=hooks.list.clone()>
                <div class=hooks.list_title.clone()>{target_list_title}</div>
                <div class=hooks.list_content.clone()>{targets}</div>
            </div>
            <div class=hooks.list.clone()>
                <div class=hooks.list_title.clone()>{assignable_list_title}</div>
                <div
                    class=hooks.list_content.clone()
                    data-assignable-count=move || options.with(Vec::len).to_string()
                ></div>
            </div>
        </div>
    }
}

/// Remove one assignable from the current value and hand the result to `on_change`.
///
/// `on_change` is not run when the ids do not resolve.
fn remove_and_notify<T, S>(
    value: Signal<TargetList<T, S>>,
    on_change: Callback<TargetList<T, S>>,
    target_id: &str,
    assignment_type_id: &str,
    assignable_id: &str,
) where
    T: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
{
    let next = value.with_untracked(|current| commit_removal(current, target_id, assignment_type_id, assignable_id));
    if let Some(next) = next {
        on_change.run(next);
    }
}

/// Apply a removal and log the outcome. `None` when the ids do not resolve.
fn commit_removal<T, S>(
    value: &[Arc<AssignmentTarget<T, S>>],
    target_id: &str,
    assignment_type_id: &str,
    assignable_id: &str,
) -> Option<TargetList<T, S>>
where
    T: Clone,
    S: Clone,
{
    match remove_assignment(value, target_id, assignment_type_id, assignable_id) {
        Ok(next) => {
            tracing::debug!(
                target_id = %target_id,
                assignment_type_id = %assignment_type_id,
                assignable_id = %assignable_id,
                "assignment removed"
            );
            Some(next)
        }
        Err(err) => {
            tracing::warn!(%err, "assignment removal rejected");
            None
        }
    }
}

fn target_class(styles: &DragAssignmentStyles) -> String {
    class_names([ClassName::from(&styles.card), (&styles.target).into()])
}

fn assignment_type_class(styles: &DragAssignmentStyles) -> String {
    class_names([ClassName::from(&styles.card), (&styles.assignment_type).into()])
}

fn assigned_class(styles: &DragAssignmentStyles) -> String {
    class_names([ClassName::from(&styles.card), (&styles.assignable).into()])
}

fn drop_cell_class(styles: &DragAssignmentStyles, highlighted: bool) -> String {
    class_names([
        ClassName::from(&styles.card),
        (&styles.add_assignment).into(),
        [(styles.highlighted.as_str(), highlighted)].into(),
    ])
}

fn render_target<T, S, R>(
    target: Arc<AssignmentTarget<T, S>>,
    configs: StoredValue<Vec<AssignmentTypeConfig<T, S>>>,
    styles: StoredValue<DragAssignmentStyles>,
    hover: RwSignal<HoverState>,
    remove: R,
) -> impl IntoView
where
    T: Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    R: Fn(String, String, String) + Copy + Send + Sync + 'static,
{
    let hooks = styles.get_value();
    let enter_id = target.id.clone();
    let leave_id = target.id.clone();
    let categories = configs.with_value(|configs| {
        visible_assignment_types(&target, configs)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });
    let category_views = categories
        .into_iter()
        .map(|config| render_assignment_type(Arc::clone(&target), config, styles, hover, remove))
        .collect_view();

    view! {
        <div
            class=target_class(&hooks)
            on:dragenter=move |_| hover.update(|h| h.enter_target(&enter_id))
            on:dragleave=move |_| hover.update(|h| h.leave_target(&leave_id))
        >
            <div class=hooks.title.clone()>{target.name.clone()}</div>
            {category_views}
        </div>
    }
}

fn render_assignment_type<T, S, R>(
    target: Arc<AssignmentTarget<T, S>>,
    config: AssignmentTypeConfig<T, S>,
    styles: StoredValue<DragAssignmentStyles>,
    hover: RwSignal<HoverState>,
    remove: R,
) -> impl IntoView
where
    T: Send + Sync + 'static,
    S: Send + Sync + 'static,
    R: Fn(String, String, String) + Copy + Send + Sync + 'static,
{
    let hooks = styles.get_value();
    let assigned = target
        .assigned(&config.id)
        .iter()
        .map(|assignable| {
            render_assigned(
                styles,
                target.id.clone(),
                config.id.clone(),
                assignable.id.clone(),
                assignable.name.clone(),
                remove,
            )
        })
        .collect_view();

    let target_id = target.id.clone();
    let assignment_type_id = config.id.clone();
    let is_target_hovered = {
        let target_id = target_id.clone();
        move || hover.with(|h| h.is_target_hovered(&target_id))
    };
    let cell_class = Signal::derive({
        let assignment_type_id = assignment_type_id.clone();
        move || {
            let highlighted = hover.with(|h| h.is_highlighted(&target_id, &assignment_type_id));
            styles.with_value(|hooks| drop_cell_class(hooks, highlighted))
        }
    });
    let on_cell_enter = Callback::new({
        let assignment_type_id = assignment_type_id.clone();
        move |()| hover.update(|h| h.enter_assignment_type(&assignment_type_id))
    });
    let on_cell_leave = Callback::new(move |()| hover.update(|h| h.leave_assignment_type(&assignment_type_id)));
    let add_text = config.add_text.clone();

    view! {
        <div class=assignment_type_class(&hooks)>
            <div class=hooks.title.clone()>{config.name.clone()}</div>
            <div class=hooks.list_content.clone()>
                {assigned}
                <Show when=is_target_hovered>
                    <div
                        class=move || cell_class.get()
                        on:dragenter=move |_| on_cell_enter.run(())
                        on:dragleave=move |_| on_cell_leave.run(())
                    >
                        {add_text.clone()}
                    </div>
                </Show>
            </div>
        </div>
    }
}

fn render_assigned<R>(
    styles: StoredValue<DragAssignmentStyles>,
    target_id: String,
    assignment_type_id: String,
    assignable_id: String,
    name: String,
    remove: R,
) -> impl IntoView
where
    R: Fn(String, String, String) + Copy + Send + Sync + 'static,
{
    let hooks = styles.get_value();

    view! {
        <div class=assigned_class(&hooks)>
            <div class=hooks.name.clone()>{name}</div>
            <button
                class=hooks.delete_button.clone()
                on:click=move |_| remove(target_id.clone(), assignment_type_id.clone(), assignable_id.clone())
            >
                "x"
            </button>
        </div>
    }
}
