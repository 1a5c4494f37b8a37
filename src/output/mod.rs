//! Output formatting module for Taskboard
//!
//! Provides table formatting and display utilities for CLI output.

use taskboard_board::TaskStats;
use taskboard_client::Task;

/// Maximum width for the title column before truncation
const MAX_TITLE_WIDTH: usize = 40;

/// Format used for the created column
const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    let len = s.chars().count();
    if len <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

/// Format the creation timestamp, or "-" when the record has none.
fn format_created(task: &Task) -> String {
    task.created_at
        .map(|at| at.format(CREATED_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Format tasks into an aligned table string.
///
/// Produces output in the format:
/// ```text
/// ID  Status     Priority  Title           Created
/// --  ---------  --------  --------------  ----------------
/// 3   completed  high      File taxes      2024-05-01 10:30
/// ```
///
/// Returns an empty result message if there are no tasks.
pub fn format_task_table(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let headers = ["ID", "Status", "Priority", "Title", "Created"];

    let id_width = tasks
        .iter()
        .map(|t| t.id.as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max(headers[0].len());

    let status_width = tasks
        .iter()
        .map(|t| t.status.as_str().len())
        .max()
        .unwrap_or(0)
        .max(headers[1].len());

    let priority_width = tasks
        .iter()
        .map(|t| t.priority.as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max(headers[2].len());

    let title_width = tasks
        .iter()
        .map(|t| t.title.chars().count().min(MAX_TITLE_WIDTH))
        .max()
        .unwrap_or(0)
        .max(headers[3].len());

    let mut output = String::new();

    output.push_str(&format!(
        "{:<id_w$}  {:<status_w$}  {:<priority_w$}  {:<title_w$}  {}\n",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        headers[4],
        id_w = id_width,
        status_w = status_width,
        priority_w = priority_width,
        title_w = title_width,
    ));

    output.push_str(&format!(
        "{:->id_w$}  {:->status_w$}  {:->priority_w$}  {:->title_w$}  {:->created_w$}\n",
        "",
        "",
        "",
        "",
        "",
        id_w = id_width,
        status_w = status_width,
        priority_w = priority_width,
        title_w = title_width,
        created_w = headers[4].len(),
    ));

    for task in tasks {
        output.push_str(&format!(
            "{:<id_w$}  {:<status_w$}  {:<priority_w$}  {:<title_w$}  {}\n",
            task.id.as_str(),
            task.status.as_str(),
            task.priority.as_str(),
            truncate(&task.title, MAX_TITLE_WIDTH),
            format_created(task),
            id_w = id_width,
            status_w = status_width,
            priority_w = priority_width,
            title_w = title_width,
        ));
    }

    // Remove trailing newline
    output.pop();

    output
}

/// Format a single task as labelled lines.
pub fn format_task(task: &Task) -> String {
    let mut output = format!(
        "ID:          {}\nTitle:       {}\nStatus:      {}\nPriority:    {}\nCreated:     {}",
        task.id,
        task.title,
        task.status,
        task.priority,
        format_created(task),
    );
    if !task.description.is_empty() {
        output.push_str(&format!("\nDescription: {}", task.description));
    }
    output
}

/// Format completion statistics.
pub fn format_stats(stats: &TaskStats) -> String {
    format!(
        "Total:      {}\nCompleted:  {}\nPending:    {}\nCompletion: {}%",
        stats.total, stats.completed, stats.pending, stats.completion_rate
    )
}
