//! Structured display values for rendered tasks
//!
//! A `DisplayTask` carries everything a renderer shows, already resolved to
//! strings, so the same value can go to terminal text or JSON.

use crate::catalog::{Catalog, Task};
use crate::relative_date::format_relative;
use crate::urgency::{ContextKey, UrgentContexts};
use chrono::NaiveDate;
use serde::Serialize;

/// Label used for the group of tasks that need no context
pub const NO_CONTEXT_LABEL: &str = "No context";

/// Label for an id the catalog doesn't know (tasks built outside `Catalog::new`)
pub const UNKNOWN_LABEL: &str = "<unknown>";

/// A task resolved for display relative to a reference date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTask {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Relative scheduled label (e.g. "next Monday")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<String>,
    /// Relative deadline label (e.g. "tomorrow at 14:30")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub priority: &'static str,
    pub effort: &'static str,
    pub contexts: Vec<String>,
    pub people: Vec<String>,
}

impl DisplayTask {
    pub fn new(task: &Task, catalog: &Catalog, reference: NaiveDate) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            body: task
                .body
                .as_deref()
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(str::to_string),
            scheduled: task.scheduled.map(|ts| format_relative(ts, reference)),
            deadline: task.deadline.map(|ts| format_relative(ts, reference)),
            priority: task.priority.label(),
            effort: task.effort.label(),
            contexts: task
                .contexts
                .iter()
                .map(|&c| catalog.context_name(c).unwrap_or(UNKNOWN_LABEL).to_string())
                .collect(),
            people: task
                .people
                .iter()
                .map(|&p| catalog.person_name(p).unwrap_or(UNKNOWN_LABEL).to_string())
                .collect(),
        }
    }

    /// Resolve a list of tasks, keeping order
    pub fn from_tasks(tasks: &[&Task], catalog: &Catalog, reference: NaiveDate) -> Vec<Self> {
        tasks
            .iter()
            .map(|task| Self::new(task, catalog, reference))
            .collect()
    }
}

/// One aggregated context group resolved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayGroup {
    pub context: String,
    pub tasks: Vec<DisplayTask>,
}

/// Resolve aggregated groups for display
///
/// Groups are ordered by label, with the no-context group last. Tasks inside
/// a group keep catalog order.
pub fn display_groups(
    urgent: &UrgentContexts<'_>,
    catalog: &Catalog,
    reference: NaiveDate,
) -> Vec<DisplayGroup> {
    let mut groups: Vec<(Option<&str>, DisplayGroup)> = urgent
        .iter()
        .map(|(key, tasks)| {
            let name = match key {
                ContextKey::Context(id) => Some(catalog.context_name(id).unwrap_or(UNKNOWN_LABEL)),
                ContextKey::NoContext => None,
            };
            let group = DisplayGroup {
                context: name.unwrap_or(NO_CONTEXT_LABEL).to_string(),
                tasks: DisplayTask::from_tasks(tasks, catalog, reference),
            };
            (name, group)
        })
        .collect();

    // `None` sorts first, so flip it to put the no-context group at the end
    groups.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    groups.into_iter().map(|(_, group)| group).collect()
}
