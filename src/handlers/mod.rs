//! MCP tool handlers for the actions server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod catalog_names;
pub mod filter_tasks;
pub mod relative_date;
pub mod urgent_contexts;
