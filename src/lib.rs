//! GTD Actions Library
//!
//! This library answers two questions about a read-only GTD task catalog:
//! which contexts have to be entered to deal with everything due by a date,
//! and which tasks can be done with the contexts, people and effort at hand.
//! Dates in the output are labelled relative to today ("tomorrow at 14:30",
//! "last Monday").
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `ActionsServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `catalog`, `urgency`, `filter`, `relative_date` - Pure
//!   functions over the catalog
//! - **Persistence Layer**: `storage` module - Read-only catalog loading (TOML or JSON)
//!
//! # Example
//!
//! ```no_run
//! use gtd_actions::{Storage, aggregate, local_date_today};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let catalog = Storage::new("actions.toml").load()?;
//!     let urgent = aggregate(&catalog, local_date_today());
//!     println!("{} urgent context(s)", urgent.len());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod filter;
pub mod formatting;
pub mod handlers;
pub mod relative_date;
pub mod storage;
pub mod urgency;
pub mod validation;

use anyhow::Result;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};

// Re-export commonly used types
pub use catalog::{Catalog, ContextId, Effort, PersonId, Priority, Task, local_date_today};
pub use display::{DisplayGroup, DisplayTask};
pub use error::{CatalogError, FilterError};
pub use filter::{FilterSpec, filter, hide_not_yet_scheduled};
pub use relative_date::format_relative;
pub use storage::Storage;
pub use urgency::{ContextKey, UrgentContexts, aggregate};

/// MCP Server handler for the actions dashboard
///
/// Holds the catalog for the whole session. Every tool is a read-only
/// computation over it, so no locking is needed.
pub struct ActionsServerHandler {
    pub(crate) catalog: Catalog,
    /// Date treated as "today"; `None` follows the local clock
    pub(crate) pinned_today: Option<NaiveDate>,
}

impl ActionsServerHandler {
    /// Create a new actions server handler
    ///
    /// # Arguments
    /// * `catalog_path` - Path to the catalog file (TOML or JSON)
    /// * `pinned_today` - Date to treat as today instead of the local clock
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use gtd_actions::ActionsServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = ActionsServerHandler::new("actions.toml", None)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(catalog_path: &str, pinned_today: Option<NaiveDate>) -> Result<Self> {
        let catalog = Storage::new(catalog_path).load()?;
        Ok(Self::from_catalog(catalog, pinned_today))
    }

    /// Create a handler over an already loaded catalog
    pub fn from_catalog(catalog: Catalog, pinned_today: Option<NaiveDate>) -> Self {
        Self {
            catalog,
            pinned_today,
        }
    }

    /// The catalog this handler serves
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Today's date, as pinned at start-up or from the local clock
    pub fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(local_date_today)
    }

    /// Parse an optional YYYY-MM-DD parameter, defaulting to today
    pub(crate) fn date_or_today(&self, date: Option<String>) -> McpResult<NaiveDate> {
        match date {
            Some(ref date_str) => validation::parse_date(date_str),
            None => Ok(self.today()),
        }
    }
}

/// GTD actions server: surfaces what needs doing now from a task catalog exported by a GTD system.
///
/// Tasks carry contexts (places or tools, e.g. "errands", "computer"), people they need,
/// an effort level (minimal, low, medium, high, total) and optional scheduled/deadline dates.
///
/// Key concepts:
/// - **urgent_contexts**: Contexts you must enter to clear everything due by a date
/// - **filter_tasks**: Tasks you can do with the contexts/people available and the effort you can spare
/// - **relative_date**: Human labels for timestamps ("next Saturday", "yesterday at 14:30")
/// - **catalog_names**: The context and person names available for filtering
///
/// Dates use YYYY-MM-DD. The catalog is read-only; nothing is ever modified.
#[mcp_server]
impl McpServer for ActionsServerHandler {
    /// **Triage**: Which contexts need a visit to clear everything due by a date.
    /// **Workflow**: Run daily. Tasks with several contexts appear under each; tasks with none under "No context".
    /// **Note**: Tasks scheduled after the date and tasks without deadlines are never listed.
    #[tool]
    async fn urgent_contexts(
        &self,
        /// Cutoff date YYYY-MM-DD (default: today). Tasks due any time that day count.
        until: Option<String>,
    ) -> McpResult<String> {
        self.handle_urgent_contexts(until).await
    }

    /// **Do**: Tasks you can do right now with what you have.
    /// **Rule**: A task matches only if ALL its contexts are among `contexts` (and it has at least one); same for `people`.
    /// **Use**: Omit contexts/people to not filter on them. Tasks scheduled after `until` are hidden.
    #[tool]
    async fn filter_tasks(
        &self,
        /// Context names you are in, e.g. ["home", "computer"]. Empty=no context filter.
        contexts: Option<Vec<String>>,
        /// People available, e.g. ["Alice"]. Empty=no people filter.
        people: Option<Vec<String>>,
        /// Maximum effort: minimal/low/medium/high/total (default: total)
        max_effort: Option<String>,
        /// Hide tasks scheduled after this date YYYY-MM-DD (default: today)
        until: Option<String>,
    ) -> McpResult<String> {
        self.handle_filter_tasks(contexts, people, max_effort, until)
            .await
    }

    /// **Format**: Describe a timestamp relative to a date, e.g. "tomorrow at 14:30" or "last Monday".
    /// **Note**: Times of exactly 00:00:00 or 23:59:59 mean "date only" and get no time suffix.
    #[tool]
    async fn relative_date(
        &self,
        /// Timestamp YYYY-MM-DDTHH:MM:SS (or YYYY-MM-DD)
        timestamp: String,
        /// Reference date YYYY-MM-DD (default: today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_relative_date(timestamp, date).await
    }

    /// **Reference**: List context and person names usable in filter_tasks, plus effort levels.
    #[tool]
    async fn catalog_names(&self) -> McpResult<String> {
        self.handle_catalog_names().await
    }
}
