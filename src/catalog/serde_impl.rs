//! Deserialization for Catalog
//!
//! Two shapes are accepted:
//! - the compact exporter payload `[contexts, people, tasks]`, where each task is a
//!   nine-element array and contexts/people are referenced by index
//! - a document with `contexts`, `people` and `tasks` tables, where tasks name
//!   their contexts and people directly
//!
//! Both end in `Catalog::new`, so index checks apply to either shape.

use super::catalog_data::Catalog;
use super::task::{ContextId, Effort, PersonId, Priority, Task};
use crate::error::CatalogError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Task row of the compact payload:
/// `[id, title, body, scheduled, deadline, priority, effort, contexts, people]`
#[derive(Deserialize)]
struct TaskRow(
    String,
    String,
    Option<String>,
    Option<NaiveDateTime>,
    Option<NaiveDateTime>,
    u8,
    u8,
    Vec<usize>,
    Vec<usize>,
);

#[derive(Deserialize)]
struct CatalogPayload(Vec<String>, Vec<String>, Vec<TaskRow>);

#[derive(Deserialize)]
struct TaskDocument {
    id: String,
    title: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    scheduled: Option<NaiveDateTime>,
    #[serde(default)]
    deadline: Option<NaiveDateTime>,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    effort: Effort,
    #[serde(default)]
    contexts: Vec<String>,
    #[serde(default)]
    people: Vec<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct CatalogDocument {
    contexts: Vec<String>,
    people: Vec<String>,
    tasks: Vec<TaskDocument>,
}

// The payload is tried first: a derived struct also accepts sequences, so the
// document shape would otherwise claim arrays.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogRepr {
    Payload(CatalogPayload),
    Document(CatalogDocument),
}

impl TryFrom<CatalogPayload> for Catalog {
    type Error = CatalogError;

    fn try_from(payload: CatalogPayload) -> Result<Self, Self::Error> {
        let CatalogPayload(contexts, people, rows) = payload;
        let tasks = rows
            .into_iter()
            .map(|row| {
                let TaskRow(id, title, body, scheduled, deadline, priority, effort, ctxs, ppl) =
                    row;
                Ok(Task {
                    id,
                    title,
                    body,
                    scheduled,
                    deadline,
                    priority: Priority::try_from(priority)?,
                    effort: Effort::try_from(effort)?,
                    contexts: ctxs.into_iter().map(ContextId).collect(),
                    people: ppl.into_iter().map(PersonId).collect(),
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Catalog::new(contexts, people, tasks)
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        let CatalogDocument {
            mut contexts,
            mut people,
            tasks,
        } = document;

        // Names not declared up front get the next index, in order of first use
        let tasks = tasks
            .into_iter()
            .map(|doc| Task {
                contexts: doc
                    .contexts
                    .iter()
                    .map(|name| ContextId(intern(&mut contexts, name)))
                    .collect(),
                people: doc
                    .people
                    .iter()
                    .map(|name| PersonId(intern(&mut people, name)))
                    .collect(),
                id: doc.id,
                title: doc.title,
                body: doc.body,
                scheduled: doc.scheduled,
                deadline: doc.deadline,
                priority: doc.priority,
                effort: doc.effort,
            })
            .collect();

        Catalog::new(contexts, people, tasks)
    }
}

fn intern(names: &mut Vec<String>, name: &str) -> usize {
    match names.iter().position(|n| n == name) {
        Some(idx) => idx,
        None => {
            names.push(name.to_string());
            names.len() - 1
        }
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let catalog = match CatalogRepr::deserialize(deserializer)? {
            CatalogRepr::Payload(payload) => Catalog::try_from(payload),
            CatalogRepr::Document(document) => Catalog::try_from(document),
        };
        catalog.map_err(serde::de::Error::custom)
    }
}
