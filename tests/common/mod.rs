//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use gtd_actions::{Catalog, ContextId, Effort, PersonId, Task};

/// Thursday, the reference date used throughout the tests
pub fn thursday() -> NaiveDate {
    date(2024, 3, 7)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, s).unwrap()
}

/// Create a test task with minimal fields
pub fn create_test_task(id: &str) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {}", id),
        ..Default::default()
    }
}

/// Create a test task with all filterable fields
pub fn create_full_test_task(
    id: &str,
    scheduled: Option<NaiveDateTime>,
    deadline: Option<NaiveDateTime>,
    effort: Effort,
    contexts: &[usize],
    people: &[usize],
) -> Task {
    Task {
        scheduled,
        deadline,
        effort,
        contexts: contexts.iter().map(|&c| ContextId::from_index(c)).collect(),
        people: people.iter().map(|&p| PersonId::from_index(p)).collect(),
        ..create_test_task(id)
    }
}

/// Catalog with contexts home/errands/office and people Alice/Bob
pub fn create_test_catalog(tasks: Vec<Task>) -> Catalog {
    Catalog::new(
        vec!["home".to_string(), "errands".to_string(), "office".to_string()],
        vec!["Alice".to_string(), "Bob".to_string()],
        tasks,
    )
    .unwrap()
}

/// Ids of the given tasks, in order
pub fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.clone()).collect()
}

/// Every subset of `0..n`, as index lists
pub fn subsets(n: usize) -> Vec<Vec<usize>> {
    (0..1usize << n)
        .map(|mask| (0..n).filter(|i| mask & (1 << i) != 0).collect())
        .collect()
}
