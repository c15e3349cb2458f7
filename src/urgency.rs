//! Urgent contexts: which contexts have to be entered to deal with everything due by a date
//!
//! The aggregation keeps catalog order. Sorting labels for display is the
//! renderer's business (see `display::display_groups`).

use crate::catalog::{Catalog, ContextId, Task};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Group key for aggregated tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKey {
    Context(ContextId),
    /// Tasks that need no particular context
    NoContext,
}

/// Due tasks grouped by context, in first-encounter order
#[derive(Debug, Default)]
pub struct UrgentContexts<'a> {
    groups: Vec<(ContextKey, Vec<&'a Task>)>,
}

impl<'a> UrgentContexts<'a> {
    /// Groups in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (ContextKey, &[&'a Task])> {
        self.groups.iter().map(|(key, tasks)| (*key, tasks.as_slice()))
    }

    /// Tasks under one key, if the key has any
    pub fn get(&self, key: ContextKey) -> Option<&[&'a Task]> {
        self.groups
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, tasks)| tasks.as_slice())
    }

    /// Keys in first-encounter order
    pub fn keys(&self) -> Vec<ContextKey> {
        self.groups.iter().map(|(key, _)| *key).collect()
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total entries across groups (a task with several contexts counts once per context)
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|(_, tasks)| tasks.len()).sum()
    }

    fn push(&mut self, key: ContextKey, task: &'a Task) {
        match self.groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, tasks)) => tasks.push(task),
            None => self.groups.push((key, vec![task])),
        }
    }
}

/// Last representable moment of a calendar day (23:59:59.999)
///
/// Stays on `date`, so it is defined for `NaiveDate::MAX` too.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // NaiveTime subtraction wraps around midnight
    date.and_time(NaiveTime::MIN - Duration::milliseconds(1))
}

/// Aggregate due tasks by context
///
/// # Arguments
/// * `catalog` - Catalog to scan
/// * `cutoff` - Date to check against; tasks due any time that day count
///
/// # Description
/// A task is due when it has a deadline on or before the end of `cutoff`.
/// Tasks scheduled after the end of `cutoff` are skipped even when due, and
/// tasks without a deadline never appear. A due task is listed under every one
/// of its contexts, or once under `ContextKey::NoContext` if it has none.
pub fn aggregate(catalog: &Catalog, cutoff: NaiveDate) -> UrgentContexts<'_> {
    let cutoff = end_of_day(cutoff);
    let mut urgent = UrgentContexts::default();

    for task in catalog.tasks() {
        if task.is_scheduled_after(cutoff) || !task.is_due_by(cutoff) {
            continue;
        }

        if task.contexts.is_empty() {
            urgent.push(ContextKey::NoContext, task);
        } else {
            for &context in &task.contexts {
                urgent.push(ContextKey::Context(context), task);
            }
        }
    }

    tracing::debug!(
        %cutoff,
        groups = urgent.len(),
        entries = urgent.entry_count(),
        "aggregated urgent contexts"
    );
    urgent
}
