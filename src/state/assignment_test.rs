use super::*;

type Target = AssignmentTarget<u32, &'static str>;

fn item(id: &str) -> Assignable<&'static str> {
    Assignable::new(id, format!("Item {id}"), "payload")
}

fn board() -> TargetList<u32, &'static str> {
    vec![
        Arc::new(
            Target::new("t1", "First", 1)
                .with_assignments("cat", vec![item("a1"), item("a2")])
                .with_assignments("dog", vec![item("d1")]),
        ),
        Arc::new(Target::new("t2", "Second", 2).with_assignments("cat", vec![item("a3")])),
    ]
}

fn ids<'a>(assigned: &'a [Assignable<&'static str>]) -> Vec<&'a str> {
    assigned.iter().map(|a| a.id.as_str()).collect()
}

// =============================================================
// remove_assignment
// =============================================================

#[test]
fn remove_assignment_drops_exactly_one_item() {
    let value = board();
    let next = remove_assignment(&value, "t1", "cat", "a1").unwrap();

    assert_eq!(next.len(), value.len());
    assert_eq!(ids(next[0].assigned("cat")), vec!["a2"]);
    assert_eq!(next[0].assigned("cat").len(), value[0].assigned("cat").len() - 1);
}

#[test]
fn remove_assignment_replaces_only_the_touched_target() {
    let value = board();
    let next = remove_assignment(&value, "t1", "cat", "a1").unwrap();

    assert!(!Arc::ptr_eq(&next[0], &value[0]));
    assert!(Arc::ptr_eq(&next[1], &value[1]));
}

#[test]
fn remove_assignment_shares_sibling_categories() {
    let value = board();
    let next = remove_assignment(&value, "t1", "cat", "a2").unwrap();

    assert!(Arc::ptr_eq(&next[0].assignments["dog"], &value[0].assignments["dog"]));
    assert!(!Arc::ptr_eq(&next[0].assignments["cat"], &value[0].assignments["cat"]));
}

#[test]
fn remove_assignment_keeps_target_fields_and_input_untouched() {
    let value = board();
    let next = remove_assignment(&value, "t1", "cat", "a1").unwrap();

    assert_eq!(next[0].id, "t1");
    assert_eq!(next[0].name, "First");
    assert_eq!(next[0].original, 1);
    assert_eq!(ids(value[0].assigned("cat")), vec!["a1", "a2"]);
}

#[test]
fn remove_assignment_single_target_example() {
    let value: TargetList<(), &'static str> = vec![Arc::new(
        AssignmentTarget::new("t1", "Only", ()).with_assignments("cat", vec![item("a1"), item("a2")]),
    )];
    let expected: TargetList<(), &'static str> = vec![Arc::new(
        AssignmentTarget::new("t1", "Only", ()).with_assignments("cat", vec![item("a2")]),
    )];

    assert_eq!(remove_assignment(&value, "t1", "cat", "a1").unwrap(), expected);
}

#[test]
fn remove_assignment_unknown_item_keeps_content() {
    let value = board();
    let next = remove_assignment(&value, "t2", "cat", "missing").unwrap();
    assert_eq!(next, value);
}

#[test]
fn remove_assignment_unknown_target_is_rejected() {
    let value = board();
    assert_eq!(
        remove_assignment(&value, "nope", "cat", "a1"),
        Err(AssignmentError::UnknownTarget("nope".to_owned()))
    );
}

#[test]
fn remove_assignment_unknown_category_is_rejected() {
    let value = board();
    assert_eq!(
        remove_assignment(&value, "t2", "dog", "d1"),
        Err(AssignmentError::UnknownAssignmentType {
            target_id: "t2".to_owned(),
            assignment_type_id: "dog".to_owned(),
        })
    );
}

#[test]
fn assignment_error_messages_name_the_ids() {
    let err = AssignmentError::UnknownAssignmentType {
        target_id: "t2".to_owned(),
        assignment_type_id: "dog".to_owned(),
    };
    assert_eq!(err.to_string(), "assignment type dog not present on target t2");
    assert_eq!(AssignmentError::UnknownTarget("x".to_owned()).to_string(), "target not found: x");
}

// =============================================================
// visible_assignment_types
// =============================================================

#[test]
fn visible_assignment_types_omits_unavailable_categories() {
    let value = board();
    let configs = vec![
        AssignmentTypeConfig::new("cat", "Cats", "Drop a cat"),
        AssignmentTypeConfig::new("dog", "Dogs", "Drop a dog").with_check_available(|target: &Target| target.original > 1),
    ];

    let first = visible_assignment_types(&value[0], &configs)
        .into_iter()
        .map(|c| c.id.as_str())
        .collect::<Vec<_>>();
    let second = visible_assignment_types(&value[1], &configs)
        .into_iter()
        .map(|c| c.id.as_str())
        .collect::<Vec<_>>();

    assert_eq!(first, vec!["cat"]);
    assert_eq!(second, vec!["cat", "dog"]);
}

#[test]
fn visible_assignment_types_never_lists_a_rejected_category() {
    let value = board();
    let configs = vec![
        AssignmentTypeConfig::new("cat", "Cats", "Drop a cat").with_check_available(|_: &Target| false),
        AssignmentTypeConfig::new("dog", "Dogs", "Drop a dog").with_check_available(|_: &Target| false),
    ];
    for target in &value {
        assert!(visible_assignment_types(target, &configs).is_empty());
    }
}

#[test]
fn visible_assignment_types_keeps_config_order() {
    let value = board();
    let configs: Vec<AssignmentTypeConfig<u32, &'static str>> = vec![
        AssignmentTypeConfig::new("dog", "Dogs", "Drop a dog"),
        AssignmentTypeConfig::new("cat", "Cats", "Drop a cat"),
    ];
    let order = visible_assignment_types(&value[0], &configs)
        .into_iter()
        .map(|c| c.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(order, vec!["dog", "cat"]);
}

// =============================================================
// AssignmentTypeConfig / AssignmentTarget helpers
// =============================================================

#[test]
fn config_predicates_default_to_true() {
    let value = board();
    let config: AssignmentTypeConfig<u32, &'static str> = AssignmentTypeConfig::new("cat", "Cats", "Drop a cat");
    assert!(config.is_available(&value[0]));
    assert!(config.can_assign(&value[0], &item("new")));
}

#[test]
fn config_can_assign_uses_supplied_predicate() {
    let value = board();
    let config = AssignmentTypeConfig::new("cat", "Cats", "Drop a cat")
        .with_check_can_assign(|target: &Target, assignable: &Assignable<&'static str>| {
            !target.assigned("cat").iter().any(|a| a.id == assignable.id)
        });
    assert!(!config.can_assign(&value[0], &item("a1")));
    assert!(config.can_assign(&value[0], &item("a9")));
}

#[test]
fn config_clone_shares_predicates() {
    let config: AssignmentTypeConfig<u32, &'static str> = AssignmentTypeConfig::new("cat", "Cats", "Drop a cat");
    let copy = config.clone();
    assert!(Arc::ptr_eq(&config.check_available, &copy.check_available));
    assert!(format!("{copy:?}").contains("\"cat\""));
}

#[test]
fn assigned_returns_empty_slice_for_missing_category() {
    let value = board();
    assert!(value[1].assigned("dog").is_empty());
}

#[test]
fn target_round_trips_through_json() {
    let target = Target::new("t1", "First", 7).with_assignments("cat", vec![item("a1")]);
    let json = serde_json::to_string(&target).unwrap();
    let back: AssignmentTarget<u32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, "t1");
    assert_eq!(back.assigned("cat")[0].original, "payload");
}
