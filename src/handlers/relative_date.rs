//! Relative date handler for the actions server

use crate::ActionsServerHandler;
use crate::relative_date::format_relative;
use crate::validation;
use mcp_attr::Result as McpResult;

impl ActionsServerHandler {
    /// Labels a timestamp relative to the given date, or today.
    pub async fn handle_relative_date(
        &self,
        timestamp: String,
        date: Option<String>,
    ) -> McpResult<String> {
        let timestamp = validation::parse_timestamp(&timestamp)?;
        let reference = self.date_or_today(date)?;
        Ok(format_relative(timestamp, reference))
    }
}
