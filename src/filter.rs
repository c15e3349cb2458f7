//! Filter engine: tasks doable with the contexts and people at hand
//!
//! `filter` is pure set membership and knows nothing about dates. Hiding
//! tasks that aren't scheduled yet is a separate step,
//! [`hide_not_yet_scheduled`].

use crate::catalog::{Catalog, ContextId, Effort, PersonId, Task};
use crate::error::FilterError;
use crate::urgency::end_of_day;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// What the user has available
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Contexts at hand; `None` means contexts aren't filtered on
    pub contexts: Option<BTreeSet<ContextId>>,
    /// People available; `None` means people aren't filtered on
    pub people: Option<BTreeSet<PersonId>>,
    /// Most effort the user is willing to spend
    pub max_effort: Effort,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            contexts: None,
            people: None,
            max_effort: Effort::total,
        }
    }
}

impl FilterSpec {
    /// Build a spec from names chosen in a UI or on the command line
    ///
    /// # Arguments
    /// * `catalog` - Catalog the names are resolved against
    /// * `contexts` - Selected context names; empty means no context filter
    /// * `people` - Selected person names; empty means no people filter
    /// * `max_effort` - Maximum effort
    ///
    /// # Returns
    /// The spec, or a `FilterError` naming the first unknown context or person
    /// together with the available ones
    pub fn from_names<S: AsRef<str>>(
        catalog: &Catalog,
        contexts: &[S],
        people: &[S],
        max_effort: Effort,
    ) -> Result<Self, FilterError> {
        let contexts = if contexts.is_empty() {
            None
        } else {
            let ids = contexts
                .iter()
                .map(|name| {
                    let name = name.as_ref();
                    catalog
                        .context_id(name)
                        .ok_or_else(|| FilterError::UnknownContext {
                            name: name.to_string(),
                            available: catalog.contexts().join(", "),
                        })
                })
                .collect::<Result<BTreeSet<_>, _>>()?;
            Some(ids)
        };

        let people = if people.is_empty() {
            None
        } else {
            let ids = people
                .iter()
                .map(|name| {
                    let name = name.as_ref();
                    catalog
                        .person_id(name)
                        .ok_or_else(|| FilterError::UnknownPerson {
                            name: name.to_string(),
                            available: catalog.people().join(", "),
                        })
                })
                .collect::<Result<BTreeSet<_>, _>>()?;
            Some(ids)
        };

        Ok(Self {
            contexts,
            people,
            max_effort,
        })
    }

    /// Check a single task against this spec
    pub fn matches(&self, task: &Task) -> bool {
        satisfies(&task.contexts, self.contexts.as_ref())
            && satisfies(&task.people, self.people.as_ref())
            && task.effort <= self.max_effort
    }
}

/// Containment rule shared by contexts and people
///
/// With no requirement everything passes. Otherwise the task's own set must be
/// non-empty and entirely inside `available`: a task needing anything that
/// isn't available is out, and so is a task that needs nothing.
pub fn satisfies<T: Ord>(needed: &[T], available: Option<&BTreeSet<T>>) -> bool {
    match available {
        None => true,
        Some(available) => !needed.is_empty() && needed.iter().all(|n| available.contains(n)),
    }
}

/// Filter the catalog, keeping catalog order
pub fn filter<'a>(catalog: &'a Catalog, spec: &FilterSpec) -> Vec<&'a Task> {
    let tasks: Vec<&Task> = catalog.tasks().iter().filter(|t| spec.matches(t)).collect();
    tracing::debug!(
        matched = tasks.len(),
        total = catalog.task_count(),
        max_effort = %spec.max_effort,
        "filtered tasks"
    );
    tasks
}

/// Drop tasks whose scheduled moment is after the end of `cutoff`
///
/// # Arguments
/// * `tasks` - Tasks to prune (order is kept)
/// * `cutoff` - Last day whose scheduled tasks are shown
///
/// # Description
/// Tasks without a scheduled date are always kept.
pub fn hide_not_yet_scheduled(tasks: &mut Vec<&Task>, cutoff: NaiveDate) {
    let cutoff = end_of_day(cutoff);
    tasks.retain(|task| !task.is_scheduled_after(cutoff));
}
