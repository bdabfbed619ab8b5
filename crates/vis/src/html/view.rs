//! The view port of the HTML page.

use std::collections::HashMap;

use crate::html::layout::PageLayout;
use crate::html::layout::WidgetKind;
use crate::id::ElementId;
use crate::view::DateInput;
use crate::view::DrawingSurface;
use crate::view::ListEntry;
use crate::view::ViewPort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Content {
    Text(String),
    List(Vec<ListEntry>),
    Inputs(Vec<DateInput>),
}

/// A view port over the widgets of a [PageLayout].
///
/// Writes to identifiers the layout does not have, or to widgets of
/// a different kind, are ignored.
#[derive(Debug, Clone)]
pub struct HtmlView {
    layout: PageLayout,
    contents: HashMap<ElementId, Content>,
}

impl HtmlView {
    /// Creates an empty view of a page.
    pub fn new(layout: PageLayout) -> HtmlView {
        Self {
            layout,
            contents: HashMap::new(),
        }
    }

    /// The page structure.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// The text of a text widget, if set.
    pub fn text(&self, id: &ElementId) -> Option<&str> {
        match self.contents.get(id) {
            Some(Content::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// The entries of a list widget, if set.
    pub fn list(&self, id: &ElementId) -> Option<&[ListEntry]> {
        match self.contents.get(id) {
            Some(Content::List(entries)) => Some(entries),
            _ => None,
        }
    }

    /// The inputs of a date range widget, if set.
    pub fn inputs(&self, id: &ElementId) -> Option<&[DateInput]> {
        match self.contents.get(id) {
            Some(Content::Inputs(inputs)) => Some(inputs),
            _ => None,
        }
    }

    fn accepts(&self, id: &ElementId, kind: WidgetKind) -> bool {
        let accepts = self
            .layout
            .widget(id)
            .is_some_and(|widget| widget.kind == kind);

        if !accepts {
            tracing::trace!(%id, ?kind, "the page has no such widget");
        }

        accepts
    }
}

impl ViewPort for HtmlView {
    fn set_text(&mut self, id: &ElementId, text: &str) {
        if self.accepts(id, WidgetKind::Text) {
            self.contents.insert(id.clone(), Content::Text(text.to_owned()));
        }
    }

    fn set_list_content(&mut self, id: &ElementId, entries: &[ListEntry]) {
        if self.accepts(id, WidgetKind::List) {
            self.contents
                .insert(id.clone(), Content::List(entries.to_vec()));
        }
    }

    fn set_date_inputs(&mut self, id: &ElementId, inputs: &[DateInput]) {
        if self.accepts(id, WidgetKind::DateRange) {
            self.contents
                .insert(id.clone(), Content::Inputs(inputs.to_vec()));
        }
    }

    fn drawing_surface(&mut self, id: &ElementId) -> Option<DrawingSurface> {
        self.accepts(id, WidgetKind::Canvas)
            .then(|| DrawingSurface::new(id.clone()))
    }
}
