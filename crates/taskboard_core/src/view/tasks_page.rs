//! Tasks index page rendering.
//!
//! # Responsibility
//! - Render the task table: one row per record, edit/delete placeholders.
//! - Wrap content fragments in the shared page layout.
//!
//! # Invariants
//! - Zero records render an empty `<tbody>` with no empty-state message.
//! - N records render exactly N `<tr>` rows in input order.
//! - Task bodies are HTML-escaped; the edit/delete anchors stay inert (`#`).

use crate::model::task::Task;
use std::fmt::Write;

/// Escapes text for safe interpolation into HTML element content.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders the tasks index content fragment.
///
/// Each record becomes one table row: the body as a link to `/tasks/{id}`,
/// followed by inert Edit and Delete placeholder anchors.
pub fn render_tasks_index(tasks: &[Task]) -> String {
    let mut html = String::new();
    html.push_str("<h1 class=\"title\">Tasks</h1>\n");
    html.push_str("<table class=\"table\">\n");
    html.push_str("    <thead class=\"thead-dark\">\n");
    html.push_str("        <tr>\n");
    html.push_str("            <th scope=\"col\">Task</th>\n");
    html.push_str("            <th scope=\"col\">Edit</th>\n");
    html.push_str("            <th scope=\"col\">Delete</th>\n");
    html.push_str("        </tr>\n");
    html.push_str("    </thead>\n");
    html.push_str("    <tbody>\n");
    for task in tasks {
        // write! into a String cannot fail.
        let _ = writeln!(
            html,
            "        <tr>\n            <th scope=\"row\"><a href=\"/tasks/{id}\">{body}</a></th>\n            <td><a href=\"#\">Edit</a></td>\n            <td><a href=\"#\">Delete</a></td>\n        </tr>",
            id = task.id,
            body = escape_html(&task.body)
        );
    }
    html.push_str("    </tbody>\n");
    html.push_str("</table>\n");
    html
}

/// Wraps a content fragment in the shared page layout.
pub fn render_page(title: &str, content: &str) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n");
    page.push_str("<html lang=\"en\">\n");
    page.push_str("<head>\n");
    page.push_str("    <meta charset=\"utf-8\">\n");
    let _ = writeln!(page, "    <title>{}</title>", escape_html(title));
    page.push_str("</head>\n");
    page.push_str("<body>\n");
    page.push_str(content);
    page.push_str("</body>\n");
    page.push_str("</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::{escape_html, render_page, render_tasks_index};
    use crate::model::task::Task;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b> & "quote" 'tick'"#),
            "&lt;b&gt; &amp; &quot;quote&quot; &#39;tick&#39;"
        );
    }

    #[test]
    fn empty_task_list_renders_empty_tbody() {
        let html = render_tasks_index(&[]);
        assert!(html.contains("<tbody>\n    </tbody>"));
        assert!(!html.contains("scope=\"row\""));
    }

    #[test]
    fn page_layout_wraps_content_and_escapes_title() {
        let page = render_page("Tasks <admin>", "<p>x</p>\n");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Tasks &lt;admin&gt;</title>"));
        assert!(page.contains("<p>x</p>"));
    }

    #[test]
    fn row_links_use_task_id_path() {
        let task = Task::new("pick up milk");
        let html = render_tasks_index(std::slice::from_ref(&task));
        assert!(html.contains(&format!("<a href=\"/tasks/{}\">pick up milk</a>", task.id)));
    }
}
