//! Catalog names handler for the actions server

use crate::ActionsServerHandler;
use mcp_attr::Result as McpResult;

impl ActionsServerHandler {
    /// Lists the context and person names a filter can select from.
    pub async fn handle_catalog_names(&self) -> McpResult<String> {
        let mut contexts: Vec<&str> = self.catalog.contexts().iter().map(String::as_str).collect();
        let mut people: Vec<&str> = self.catalog.people().iter().map(String::as_str).collect();
        contexts.sort_unstable_by_key(|name| name.to_lowercase());
        people.sort_unstable_by_key(|name| name.to_lowercase());

        let mut result = format!("{} task(s) in catalog\n", self.catalog.task_count());
        result.push_str(&format!("Contexts: {}\n", join_or_none(&contexts)));
        result.push_str(&format!("People: {}\n", join_or_none(&people)));
        result.push_str("Efforts: minimal, low, medium, high, total\n");
        Ok(result)
    }
}

fn join_or_none(names: &[&str]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}
