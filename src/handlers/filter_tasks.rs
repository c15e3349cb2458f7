//! Filter handler for the actions server

use crate::ActionsServerHandler;
use crate::display::DisplayTask;
use crate::filter;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl ActionsServerHandler {
    /// Handles filter operations - selects tasks doable with the given contexts, people and
    /// effort, hides tasks scheduled after the cutoff date (default today), and formats the result.
    pub async fn handle_filter_tasks(
        &self,
        contexts: Option<Vec<String>>,
        people: Option<Vec<String>>,
        max_effort: Option<String>,
        until: Option<String>,
    ) -> McpResult<String> {
        let spec = validation::parse_filter_spec(&self.catalog, contexts, people, max_effort)?;
        let today = self.today();
        let cutoff = self.date_or_today(until)?;

        let mut tasks = filter::filter(&self.catalog, &spec);
        filter::hide_not_yet_scheduled(&mut tasks, cutoff);

        let display = DisplayTask::from_tasks(&tasks, &self.catalog, today);
        Ok(formatting::format_display_tasks(&display))
    }
}
