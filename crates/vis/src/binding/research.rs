//! The related research list.

use serde_json::Value;

use crate::binding::ids;
use crate::format::PLACEHOLDER;
use crate::payload::ResearchItem;
use crate::view::ListEntry;
use crate::view::ViewPort;

/// The entry shown when there is no related research.
pub const NO_ITEMS: &str = "No research items found.";

/// Replaces the research list with one link per item.
///
/// An empty or absent list shows a single [NO_ITEMS] entry.
pub fn render_research<V: ViewPort>(view: &mut V, items: Option<&[ResearchItem]>) {
    let entries = match items {
        Some(items) if !items.is_empty() => items.iter().map(entry).collect(),
        _ => vec![ListEntry::text(NO_ITEMS)],
    };

    view.set_list_content(&ids::RESEARCH, &entries);
}

fn entry(item: &ResearchItem) -> ListEntry {
    let text = format!(
        "{title} ({year}) — {authors}",
        title = item.title.as_deref().unwrap_or(PLACEHOLDER),
        year = year(item.year.as_ref()),
        authors = item.authors.as_deref().unwrap_or(PLACEHOLDER),
    );

    match &item.link {
        Some(link) if !link.is_empty() => ListEntry::link(text, link),
        _ => ListEntry::text(text),
    }
}

fn year(year: Option<&Value>) -> String {
    match year {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => String::from(PLACEHOLDER),
    }
}
