//! List rendering: Builds the visible task list for the terminal.
//!
//! Every render rebuilds the whole view from the current projection; nothing
//! is patched in place.

use super::types::Task;
use super::view::{Counts, Filter};
use chrono::{DateTime, Utc};
use colored::Colorize;

/// Escapes markup-significant characters in user text.
///
/// Task text is untrusted input and must reach the rendered tree as literal
/// text, never as markup.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats a creation timestamp as a coarse age label ("3m ago").
///
/// Computed only at render time. Unparseable timestamps fall back to the raw
/// string.
#[must_use]
pub fn age_label(created_at: &str, now: DateTime<Utc>) -> String {
    let Ok(created) = DateTime::parse_from_rfc3339(created_at) else {
        return created_at.to_string();
    };
    let secs = (now - created.with_timezone(&Utc)).num_seconds().max(0);
    match secs {
        0..=59 => "just now".to_string(),
        60..=3_599 => format!("{}m ago", secs / 60),
        3_600..=86_399 => format!("{}h ago", secs / 3_600),
        _ => format!("{}d ago", secs / 86_400),
    }
}

/// Renders the projection as a full list view.
///
/// Header with the filter name, one row per task, an empty-state line when
/// the projection is empty, and the active/total summary.
#[must_use]
pub fn list_view(tasks: &[&Task], filter: Filter, counts: &Counts, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} Tasks ({filter})\n", "📋".cyan()));

    if tasks.is_empty() {
        out.push_str("   (nothing to show)\n");
    }
    for task in tasks {
        out.push_str(&format!(
            "   {} {}  {}  {}\n",
            checkbox(task.completed),
            task.short_id().blue(),
            escape(&task.text),
            age_label(&task.created_at, now).dimmed()
        ));
    }

    out.push_str(&format!(
        "\n   {} active / {} total\n",
        counts.active, counts.total
    ));
    out
}

fn checkbox(completed: bool) -> String {
    if completed {
        "[x]".green().to_string()
    } else {
        "[ ]".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::view;

    fn make_task(text: &str, completed: bool) -> Task {
        Task {
            id: "0123456789abcdef".to_string(),
            text: text.to_string(),
            completed,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn render(tasks: &[Task], filter: Filter) -> String {
        colored::control::set_override(false);
        let now = DateTime::parse_from_rfc3339("2024-01-01T00:00:30Z")
            .unwrap()
            .with_timezone(&Utc);
        list_view(
            &view::project(tasks, filter),
            filter,
            &view::counts(tasks),
            now,
        )
    }

    #[test]
    fn escape_covers_all_markup_characters() {
        assert_eq!(
            escape(r#"a&b<c>d"e'f"#),
            "a&amp;b&lt;c&gt;d&quot;e&#39;f"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn script_text_renders_as_literal_markup() {
        let tasks = vec![make_task("<script>alert(1)</script>", false)];
        let view = render(&tasks, Filter::All);
        assert!(view.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!view.contains("<script>"));
    }

    #[test]
    fn rows_carry_checkbox_short_id_and_age() {
        let tasks = vec![make_task("write tests", true)];
        let view = render(&tasks, Filter::All);
        assert!(view.contains("[x]"));
        assert!(view.contains("01234567"));
        assert!(view.contains("write tests"));
        assert!(view.contains("just now"));
    }

    #[test]
    fn empty_projection_shows_the_empty_state() {
        let view = render(&[], Filter::Active);
        assert!(view.contains("(nothing to show)"));
        assert!(view.contains("0 active / 0 total"));
    }

    #[test]
    fn summary_counts_the_whole_collection_not_the_projection() {
        let tasks = vec![make_task("done", true), make_task("open", false)];
        let view = render(&tasks, Filter::Completed);
        assert!(view.contains("1 active / 2 total"));
    }

    #[test]
    fn age_label_is_coarse() {
        let now = DateTime::parse_from_rfc3339("2024-01-02T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(age_label("2024-01-01T23:59:30+00:00", now), "just now");
        assert_eq!(age_label("2024-01-01T23:55:00+00:00", now), "5m ago");
        assert_eq!(age_label("2024-01-01T21:00:00+00:00", now), "3h ago");
        assert_eq!(age_label("2023-12-30T00:00:00+00:00", now), "3d ago");
        assert_eq!(age_label("not-a-timestamp", now), "not-a-timestamp");
    }
}
