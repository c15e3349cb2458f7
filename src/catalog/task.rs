use crate::error::CatalogError;
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Position of a context in the catalog's ordered context list
///
/// Ids inside a [`Catalog`](super::Catalog)'s tasks are checked against its
/// context list. An id built with `from_index` is not, so name lookups return
/// `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ContextId(pub(crate) usize);

impl ContextId {
    /// Id for a raw index; only `Catalog::new` checks it is in range
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Position of a person in the catalog's ordered person list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PersonId(pub(crate) usize);

impl PersonId {
    /// Id for a raw index; only `Catalog::new` checks it is in range
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Task priority
///
/// Uses snake_case naming to match the catalog serialization format.
/// Declaration order is the ordinal order (0-3).
#[allow(non_camel_case_types)]
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    #[default]
    low,
    medium,
    high,
    /// Above high, for things that must not slip
    important,
}

impl Priority {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Fixed display label
    pub fn label(self) -> &'static str {
        match self {
            Priority::low => "Low",
            Priority::medium => "Medium",
            Priority::high => "High",
            Priority::important => "Important",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = CatalogError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Priority::low),
            1 => Ok(Priority::medium),
            2 => Ok(Priority::high),
            3 => Ok(Priority::important),
            _ => Err(CatalogError::PriorityOutOfRange(ordinal)),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::low),
            "medium" => Ok(Priority::medium),
            "high" => Ok(Priority::high),
            "important" => Ok(Priority::important),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high, important",
                s
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Effort needed to complete a task
///
/// Declaration order is the ordinal order (0-4), so `<=` compares effort.
#[allow(non_camel_case_types)]
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Effort {
    /// A couple of minutes
    #[default]
    minimal,
    low,
    medium,
    high,
    /// Takes over the whole day
    total,
}

impl Effort {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Fixed display label
    pub fn label(self) -> &'static str {
        match self {
            Effort::minimal => "Minimal",
            Effort::low => "Low",
            Effort::medium => "Medium",
            Effort::high => "High",
            Effort::total => "Total",
        }
    }
}

impl TryFrom<u8> for Effort {
    type Error = CatalogError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Effort::minimal),
            1 => Ok(Effort::low),
            2 => Ok(Effort::medium),
            3 => Ok(Effort::high),
            4 => Ok(Effort::total),
            _ => Err(CatalogError::EffortOutOfRange(ordinal)),
        }
    }
}

impl FromStr for Effort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimal" => Ok(Effort::minimal),
            "low" => Ok(Effort::low),
            "medium" => Ok(Effort::medium),
            "high" => Ok(Effort::high),
            "total" => Ok(Effort::total),
            _ => Err(format!(
                "Invalid effort '{}'. Valid options are: minimal, low, medium, high, total",
                s
            )),
        }
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An actionable task as loaded from the catalog
///
/// Tasks are never edited once they are part of a [`Catalog`](super::Catalog).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    /// Opaque identifier from the exporter (usually a UUID)
    pub id: String,
    /// Short label
    pub title: String,
    /// Optional long-form Markdown body
    pub body: Option<String>,
    /// Earliest moment the task becomes actionable; `None` means immediately
    pub scheduled: Option<NaiveDateTime>,
    /// Moment by which the task must be done; `None` means no deadline
    pub deadline: Option<NaiveDateTime>,
    pub priority: Priority,
    pub effort: Effort,
    /// Contexts the task requires (a set, kept in first-occurrence order)
    pub contexts: Vec<ContextId>,
    /// People the task requires (a set, kept in first-occurrence order)
    pub people: Vec<PersonId>,
}

impl Task {
    /// Check whether this task is still waiting for its scheduled moment at `cutoff`
    pub fn is_scheduled_after(&self, cutoff: NaiveDateTime) -> bool {
        self.scheduled.is_some_and(|scheduled| scheduled > cutoff)
    }

    /// Check whether this task's deadline falls on or before `cutoff`
    pub fn is_due_by(&self, cutoff: NaiveDateTime) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= cutoff)
    }
}
