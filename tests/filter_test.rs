//! Filter engine: containment rule, effort bound and the scheduling cutoff
mod common;

use common::{at, create_full_test_task, create_test_catalog, ids, subsets, thursday};
use gtd_actions::{
    ContextId, Effort, FilterSpec, PersonId, filter, hide_not_yet_scheduled,
};
use std::collections::BTreeSet;

const EFFORTS: [Effort; 5] = [
    Effort::minimal,
    Effort::low,
    Effort::medium,
    Effort::high,
    Effort::total,
];

#[test]
fn test_home_filter_excludes_task_needing_errands_too() {
    let catalog = create_test_catalog(vec![
        create_full_test_task("both", None, None, Effort::low, &[0, 1], &[]),
        create_full_test_task("home", None, None, Effort::low, &[0], &[]),
    ]);
    let spec = FilterSpec::from_names(&catalog, &["home"], &[], Effort::total).unwrap();

    assert_eq!(ids(&filter(&catalog, &spec)), vec!["home"]);
}

#[test]
fn test_containment_law_over_all_context_subsets() {
    let task_sets = subsets(3);
    let tasks = task_sets
        .iter()
        .enumerate()
        .map(|(i, contexts)| {
            create_full_test_task(&format!("t{}", i), None, None, Effort::low, contexts, &[])
        })
        .collect();
    let catalog = create_test_catalog(tasks);

    for required in subsets(3).into_iter().filter(|s| !s.is_empty()) {
        let available: BTreeSet<ContextId> =
            required.iter().map(|&c| ContextId::from_index(c)).collect();
        let spec = FilterSpec {
            contexts: Some(available.clone()),
            ..Default::default()
        };
        let matched = filter(&catalog, &spec);

        for task in catalog.tasks() {
            let expected =
                !task.contexts.is_empty() && task.contexts.iter().all(|c| available.contains(c));
            let found = matched.iter().any(|t| t.id == task.id);
            assert_eq!(found, expected, "task {} with {:?}", task.id, required);
        }
    }

    // No context filter: everything passes the context criterion
    assert_eq!(filter(&catalog, &FilterSpec::default()).len(), task_sets.len());
}

#[test]
fn test_people_rule_matches_context_rule() {
    let catalog = create_test_catalog(vec![
        create_full_test_task("alone", None, None, Effort::low, &[], &[]),
        create_full_test_task("alice", None, None, Effort::low, &[], &[0]),
        create_full_test_task("both", None, None, Effort::low, &[], &[0, 1]),
    ]);
    let spec = FilterSpec {
        people: Some([PersonId::from_index(0)].into_iter().collect()),
        ..Default::default()
    };

    assert_eq!(ids(&filter(&catalog, &spec)), vec!["alice"]);
}

#[test]
fn test_both_criteria_must_hold() {
    let catalog = create_test_catalog(vec![
        create_full_test_task("ok", None, None, Effort::low, &[0], &[1]),
        create_full_test_task("wrong-person", None, None, Effort::low, &[0], &[0]),
        create_full_test_task("wrong-place", None, None, Effort::low, &[2], &[1]),
        create_full_test_task("too-big", None, None, Effort::high, &[0], &[1]),
    ]);
    let spec = FilterSpec::from_names(&catalog, &["home"], &["Bob"], Effort::medium).unwrap();

    assert_eq!(ids(&filter(&catalog, &spec)), vec!["ok"]);
}

#[test]
fn test_effort_monotonicity() {
    let tasks = EFFORTS
        .iter()
        .enumerate()
        .flat_map(|(i, &effort)| {
            [
                create_full_test_task(&format!("e{}-home", i), None, None, effort, &[0], &[]),
                create_full_test_task(&format!("e{}-none", i), None, None, effort, &[], &[]),
            ]
        })
        .collect();
    let catalog = create_test_catalog(tasks);

    for window in EFFORTS.windows(2) {
        for contexts in [Vec::<&str>::new(), vec!["home"]] {
            let smaller = FilterSpec::from_names(&catalog, contexts.as_slice(), &[], window[0]).unwrap();
            let larger = FilterSpec::from_names(&catalog, contexts.as_slice(), &[], window[1]).unwrap();
            let smaller = ids(&filter(&catalog, &smaller));
            let larger = ids(&filter(&catalog, &larger));

            assert!(smaller.len() < larger.len());
            assert!(smaller.iter().all(|id| larger.contains(id)));
        }
    }
}

#[test]
fn test_empty_selection_means_no_filter() {
    let catalog = create_test_catalog(vec![
        create_full_test_task("a", None, None, Effort::low, &[], &[]),
        create_full_test_task("b", None, None, Effort::low, &[1], &[0]),
    ]);
    let spec = FilterSpec::from_names::<&str>(&catalog, &[], &[], Effort::total).unwrap();

    assert_eq!(ids(&filter(&catalog, &spec)), vec!["a", "b"]);
}

#[test]
fn test_scheduling_cutoff_is_a_separate_step() {
    let catalog = create_test_catalog(vec![
        create_full_test_task("now", Some(at(2024, 3, 7, 23, 0, 0)), None, Effort::low, &[], &[]),
        create_full_test_task("saturday", Some(at(2024, 3, 9, 0, 0, 0)), None, Effort::low, &[], &[]),
        create_full_test_task("anytime", None, None, Effort::low, &[], &[]),
    ]);

    let mut tasks = filter(&catalog, &FilterSpec::default());
    assert_eq!(tasks.len(), 3);

    hide_not_yet_scheduled(&mut tasks, thursday());
    assert_eq!(ids(&tasks), vec!["now", "anytime"]);
}
