use crate::catalog::task::{ContextId, PersonId, Task};
use crate::error::CatalogError;
use std::collections::HashMap;

/// Read-only task catalog shared by the aggregator, the filter engine and the renderer
pub struct Catalog {
    /// Context names; a `ContextId` is a position in this list
    contexts: Vec<String>,

    /// Person names; a `PersonId` is a position in this list
    people: Vec<String>,

    /// Tasks in exporter order
    ///
    /// This order is significant: every derived view (aggregated groups,
    /// filtered lists) preserves it.
    tasks: Vec<Task>,

    /// Name -> index lookups for resolving user selections
    context_index: HashMap<String, ContextId>,
    person_index: HashMap<String, PersonId>,
}

impl Catalog {
    /// Build a catalog, checking every reference
    ///
    /// # Arguments
    /// * `contexts` - Ordered context names
    /// * `people` - Ordered person names
    /// * `tasks` - Tasks in display order
    ///
    /// # Returns
    /// The catalog, or a `CatalogError` for the first out-of-range index or
    /// duplicate name. Duplicate ids inside a task's own context/people lists
    /// are collapsed, keeping the first occurrence.
    pub fn new(
        contexts: Vec<String>,
        people: Vec<String>,
        mut tasks: Vec<Task>,
    ) -> Result<Self, CatalogError> {
        let mut context_index = HashMap::with_capacity(contexts.len());
        for (idx, name) in contexts.iter().enumerate() {
            if context_index.insert(name.clone(), ContextId(idx)).is_some() {
                return Err(CatalogError::DuplicateContext(name.clone()));
            }
        }
        let mut person_index = HashMap::with_capacity(people.len());
        for (idx, name) in people.iter().enumerate() {
            if person_index.insert(name.clone(), PersonId(idx)).is_some() {
                return Err(CatalogError::DuplicatePerson(name.clone()));
            }
        }

        for task in &mut tasks {
            if let Some(bad) = task.contexts.iter().find(|c| c.0 >= contexts.len()) {
                return Err(CatalogError::ContextOutOfRange {
                    task_id: task.id.clone(),
                    index: bad.0,
                    available: contexts.len(),
                });
            }
            if let Some(bad) = task.people.iter().find(|p| p.0 >= people.len()) {
                return Err(CatalogError::PersonOutOfRange {
                    task_id: task.id.clone(),
                    index: bad.0,
                    available: people.len(),
                });
            }
            dedup_in_order(&mut task.contexts);
            dedup_in_order(&mut task.people);

            if let (Some(scheduled), Some(deadline)) = (task.scheduled, task.deadline)
                && scheduled > deadline
            {
                tracing::warn!(
                    task_id = %task.id,
                    %scheduled,
                    %deadline,
                    "task is scheduled after its deadline"
                );
            }
        }

        Ok(Self {
            contexts,
            people,
            tasks,
            context_index,
            person_index,
        })
    }

    /// All tasks in catalog order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Context names in index order
    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    /// Person names in index order
    pub fn people(&self) -> &[String] {
        &self.people
    }

    /// Name of a context, if `id` is in range for this catalog
    pub fn context_name(&self, id: ContextId) -> Option<&str> {
        self.contexts.get(id.0).map(String::as_str)
    }

    /// Name of a person, if `id` is in range for this catalog
    pub fn person_name(&self, id: PersonId) -> Option<&str> {
        self.people.get(id.0).map(String::as_str)
    }

    /// Find a context by its name
    pub fn context_id(&self, name: &str) -> Option<ContextId> {
        self.context_index.get(name).copied()
    }

    /// Find a person by their name
    pub fn person_id(&self, name: &str) -> Option<PersonId> {
        self.person_index.get(name).copied()
    }

    /// Count tasks in the catalog
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

fn dedup_in_order<T: PartialEq + Copy>(items: &mut Vec<T>) {
    let mut seen = Vec::with_capacity(items.len());
    items.retain(|item| {
        if seen.contains(item) {
            false
        } else {
            seen.push(*item);
            true
        }
    });
}
