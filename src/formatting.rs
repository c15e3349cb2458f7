//! Formatting helper functions for terminal output
//!
//! This module turns display values into plain text for the CLI and the MCP tools.

use crate::display::{DisplayGroup, DisplayTask};

/// Format display tasks into a display string
///
/// # Arguments
/// * `tasks` - Tasks to format, in display order
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_display_tasks(tasks: &[DisplayTask]) -> String {
    if tasks.is_empty() {
        return "No items found".to_string();
    }

    let mut result = format!("Found {} item(s):\n\n", tasks.len());
    for task in tasks {
        push_task(&mut result, task);
    }
    result
}

/// Format aggregated context groups into a display string
///
/// # Arguments
/// * `groups` - Groups as produced by `display::display_groups`
///
/// # Returns
/// One heading per context followed by its tasks
pub fn format_urgent_contexts(groups: &[DisplayGroup]) -> String {
    if groups.is_empty() {
        return "No urgent contexts".to_string();
    }

    let mut result = format!("Found {} urgent context(s):\n", groups.len());
    for group in groups {
        result.push_str(&format!("\n## {} ({})\n", group.context, group.tasks.len()));
        for task in &group.tasks {
            push_task(&mut result, task);
        }
    }
    result
}

fn push_task(result: &mut String, task: &DisplayTask) {
    result.push_str(&format!("- [{}] {}\n", task.id, task.title));
    result.push_str(&format!(
        "  Priority: {}, Effort: {}\n",
        task.priority, task.effort
    ));

    if let Some(ref scheduled) = task.scheduled {
        result.push_str(&format!("  Scheduled: {}\n", scheduled));
    }
    if let Some(ref deadline) = task.deadline {
        result.push_str(&format!("  Deadline: {}\n", deadline));
    }
    if !task.contexts.is_empty() {
        result.push_str(&format!("  Contexts: {}\n", task.contexts.join(", ")));
    }
    if !task.people.is_empty() {
        result.push_str("  People needed:\n");
        for person in &task.people {
            result.push_str(&format!("    - {}\n", person));
        }
    }
    if let Some(ref body) = task.body {
        for line in body.lines() {
            result.push_str(&format!("    {}\n", line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn display_task(id: &str) -> DisplayTask {
        DisplayTask {
            id: id.to_string(),
            title: format!("Task {}", id),
            body: None,
            scheduled: None,
            deadline: None,
            priority: "Low",
            effort: "Minimal",
            contexts: vec![],
            people: vec![],
        }
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_display_tasks(&[]), "No items found");
        assert_eq!(format_urgent_contexts(&[]), "No urgent contexts");
    }

    #[test]
    fn test_format_full_task() {
        let task = DisplayTask {
            body: Some("Line one\nLine two".to_string()),
            scheduled: Some("last Monday".to_string()),
            deadline: Some("tomorrow at 14:30".to_string()),
            contexts: vec!["home".to_string(), "errands".to_string()],
            people: vec!["Alice".to_string()],
            ..display_task("a")
        };

        assert_eq!(
            format_display_tasks(&[task]),
            "Found 1 item(s):\n\n\
             - [a] Task a\n  \
             Priority: Low, Effort: Minimal\n  \
             Scheduled: last Monday\n  \
             Deadline: tomorrow at 14:30\n  \
             Contexts: home, errands\n  \
             People needed:\n    \
             - Alice\n    \
             Line one\n    \
             Line two\n"
        );
    }

    #[test]
    fn test_format_urgent_contexts() {
        let groups = vec![
            DisplayGroup {
                context: "errands".to_string(),
                tasks: vec![display_task("a"), display_task("b")],
            },
            DisplayGroup {
                context: "No context".to_string(),
                tasks: vec![display_task("c")],
            },
        ];
        let output = format_urgent_contexts(&groups);

        assert!(output.starts_with("Found 2 urgent context(s):\n"));
        assert!(output.contains("## errands (2)\n- [a] Task a\n"));
        assert!(output.contains("## No context (1)\n- [c] Task c\n"));
    }
}
