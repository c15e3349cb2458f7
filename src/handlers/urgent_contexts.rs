//! Urgent contexts handler for the actions server

use crate::ActionsServerHandler;
use crate::display;
use crate::formatting;
use crate::urgency;
use mcp_attr::Result as McpResult;

impl ActionsServerHandler {
    /// Aggregates tasks due by the cutoff date under the contexts they need and renders them.
    /// The cutoff defaults to today; date labels are always relative to today.
    pub async fn handle_urgent_contexts(&self, until: Option<String>) -> McpResult<String> {
        let today = self.today();
        let cutoff = self.date_or_today(until)?;

        let urgent = urgency::aggregate(&self.catalog, cutoff);
        let groups = display::display_groups(&urgent, &self.catalog, today);

        Ok(formatting::format_urgent_contexts(&groups))
    }
}
