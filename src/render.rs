//! Result formatting for terminal output
//!
//! Renders search results as Markdown cards (or JSON). Presentation policy
//! lives here: the not-found message, the cleared-search case and the single
//! entry whose name is rendered as a hyperlink.

use crate::dataset::Record;

/// Shown when a non-empty query matched nothing
pub const NOT_FOUND_MESSAGE: &str = "No entries found for your search.";

/// Entry rendered with a hyperlink by default
pub const DEFAULT_LINK_NAME: &str = "Vinicius";

/// Rendering options
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Exact (case-sensitive) name whose heading links to its `link`
    pub link_name: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            link_name: Some(DEFAULT_LINK_NAME.to_string()),
        }
    }
}

/// Render results for `query` as Markdown.
///
/// An empty query renders nothing at all.
pub fn render_markdown(query: &str, results: &[&Record], options: &RenderOptions) -> String {
    if query.is_empty() {
        return String::new();
    }
    if results.is_empty() {
        return NOT_FOUND_MESSAGE.to_string();
    }

    results
        .iter()
        .map(|record| render_card(record, options))
        .collect::<Vec<_>>()
        .join("\n---\n\n")
}

/// Render results as a pretty-printed JSON array using the dataset's keys
pub fn render_json(results: &[&Record]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

fn render_card(record: &Record, options: &RenderOptions) -> String {
    let mut card = format!("### {}\n\n", heading(record, options));
    card.push_str(&format!("**Creator:** {}\n\n", record.creator));

    let year = record.year.to_string();
    if !year.is_empty() {
        card.push_str(&year);
        card.push_str("\n\n");
    }

    if !record.description.is_empty() {
        card.push_str(&record.description);
        card.push('\n');
    }

    card
}

fn heading(record: &Record, options: &RenderOptions) -> String {
    let linked = options
        .link_name
        .as_deref()
        .is_some_and(|name| name == record.name);

    match (&record.link, linked) {
        (Some(link), true) => format!("[{}]({})", record.name, link),
        _ => record.name.clone(),
    }
}
