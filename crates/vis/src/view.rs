//! The view port through which renderers reach the page.
//!
//! Renderers never look elements up themselves. They ask the view port for a
//! text slot, a list slot, a date-input container or a drawing surface by
//! identifier, and every operation tolerates an identifier the page does not
//! have.

use serde::Serialize;

use crate::id::ElementId;

/// Access to the widget slots of a dashboard page.
pub trait ViewPort {
    /// Sets the text content of an element. Unknown identifiers are ignored.
    fn set_text(&mut self, id: &ElementId, text: &str);

    /// Replaces the entries of a list element. Unknown identifiers are ignored.
    fn set_list_content(&mut self, id: &ElementId, entries: &[ListEntry]);

    /// Replaces the date inputs of a container. An empty slice clears it.
    fn set_date_inputs(&mut self, id: &ElementId, inputs: &[DateInput]);

    /// Returns the drawing surface of a canvas element, if the page has one.
    fn drawing_surface(&mut self, id: &ElementId) -> Option<DrawingSurface>;
}

/// A canvas slot handed to the charting backend.
///
/// Renderers obtain surfaces through [ViewPort::drawing_surface] only, which
/// returns one for canvases the page has. View port implementations create
/// them with [DrawingSurface::new].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingSurface {
    id: ElementId,
}

impl DrawingSurface {
    /// Creates the surface of the canvas with the given identifier.
    ///
    /// Meant for [ViewPort] implementations that have verified the canvas
    /// exists.
    pub fn new(id: ElementId) -> DrawingSurface {
        Self { id }
    }

    /// The identifier of the canvas.
    pub fn id(&self) -> &ElementId {
        &self.id
    }
}

/// An entry of a list element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    /// The entry text.
    pub text: String,
    /// The link target, if the entry is a link.
    pub href: Option<String>,
}

impl ListEntry {
    /// A plain text entry.
    pub fn text(text: impl Into<String>) -> ListEntry {
        Self {
            text: text.into(),
            href: None,
        }
    }

    /// A link entry.
    ///
    /// Links are always opened in a new browsing context that gets no
    /// reference back to the dashboard.
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> ListEntry {
        Self {
            text: text.into(),
            href: Some(href.into()),
        }
    }
}

/// A date input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateInput {
    /// The input name.
    pub name: &'static str,
    /// The label shown next to the input.
    pub label: &'static str,
}

impl DateInput {
    /// Creates a date input.
    pub fn new(name: &'static str, label: &'static str) -> DateInput {
        Self { name, label }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    /// A view port that records what was written to a fixed set of elements.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingView {
        pub texts: HashMap<String, Option<String>>,
        pub lists: HashMap<String, Vec<ListEntry>>,
        pub containers: HashMap<String, Vec<DateInput>>,
        pub canvases: Vec<String>,
    }

    impl RecordingView {
        pub fn with_texts(ids: &[&str]) -> RecordingView {
            let mut view = RecordingView::default();
            for id in ids {
                view.texts.insert(id.to_string(), None);
            }
            view
        }

        pub fn with_containers(ids: &[&str]) -> RecordingView {
            let mut view = RecordingView::default();
            for id in ids {
                view.containers.insert(id.to_string(), Vec::new());
            }
            view
        }

        pub fn with_canvases(ids: &[&str]) -> RecordingView {
            RecordingView {
                canvases: ids.iter().map(|id| id.to_string()).collect(),
                ..Default::default()
            }
        }

        pub fn with_lists(ids: &[&str]) -> RecordingView {
            let mut view = RecordingView::default();
            for id in ids {
                view.lists.insert(id.to_string(), Vec::new());
            }
            view
        }

        pub fn text(&self, id: &str) -> Option<&str> {
            self.texts.get(id).and_then(|text| text.as_deref())
        }

        pub fn list(&self, id: &str) -> Option<&[ListEntry]> {
            self.lists.get(id).map(Vec::as_slice)
        }

        pub fn inputs(&self, id: &str) -> Option<&[DateInput]> {
            self.containers.get(id).map(Vec::as_slice)
        }
    }

    impl ViewPort for RecordingView {
        fn set_text(&mut self, id: &ElementId, text: &str) {
            if let Some(slot) = self.texts.get_mut(id.as_str()) {
                *slot = Some(text.to_owned());
            }
        }

        fn set_list_content(&mut self, id: &ElementId, entries: &[ListEntry]) {
            if let Some(slot) = self.lists.get_mut(id.as_str()) {
                *slot = entries.to_vec();
            }
        }

        fn set_date_inputs(&mut self, id: &ElementId, inputs: &[DateInput]) {
            if let Some(slot) = self.containers.get_mut(id.as_str()) {
                *slot = inputs.to_vec();
            }
        }

        fn drawing_surface(&mut self, id: &ElementId) -> Option<DrawingSurface> {
            self.canvases
                .iter()
                .any(|canvas| canvas == id.as_str())
                .then(|| DrawingSurface::new(id.clone()))
        }
    }
}
