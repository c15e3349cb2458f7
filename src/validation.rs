//! Validation helper functions for the MCP tools
//!
//! This module turns raw tool parameters (dates, timestamps, effort names,
//! context/person selections) into typed values or `INVALID_PARAMS` errors.

use crate::catalog::{Catalog, Effort};
use crate::filter::FilterSpec;
use chrono::{NaiveDate, NaiveDateTime};
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        invalid_params(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ))
    })
}

/// Parse and validate timestamp parameter
///
/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM` or a bare date (read as
/// a date-only timestamp at midnight).
pub fn parse_timestamp(timestamp_str: &str) -> McpResult<NaiveDateTime> {
    let trimmed = timestamp_str.trim();
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            invalid_params(format!(
                "Invalid timestamp '{}'. Use YYYY-MM-DDTHH:MM:SS (e.g., '2025-03-15T14:30:00')",
                timestamp_str
            ))
        })
}

/// Parse and validate effort parameter
///
/// # Arguments
/// * `effort_str` - Effort name (minimal, low, medium, high, total)
pub fn parse_effort(effort_str: &str) -> McpResult<Effort> {
    effort_str.trim().parse::<Effort>().map_err(invalid_params)
}

/// Build a filter spec from tool parameters
///
/// Missing or empty selections mean "no filter"; a missing effort means `total`.
pub fn parse_filter_spec(
    catalog: &Catalog,
    contexts: Option<Vec<String>>,
    people: Option<Vec<String>>,
    max_effort: Option<String>,
) -> McpResult<FilterSpec> {
    let max_effort = match max_effort {
        Some(ref effort) => parse_effort(effort)?,
        None => Effort::total,
    };
    let contexts = contexts.unwrap_or_default();
    let people = people.unwrap_or_default();

    FilterSpec::from_names(catalog, contexts.as_slice(), people.as_slice(), max_effort)
        .map_err(|e| invalid_params(e.to_string()))
}
