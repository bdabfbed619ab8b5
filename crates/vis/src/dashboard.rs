//! The dashboard controller.
//!
//! A [Dashboard] owns the view port and the chart registry of one page for
//! the page's whole lifetime. Each load cycle is stamped with a [LoadTicket];
//! only the most recently issued ticket may render, so a response that
//! completes after a newer request was issued is discarded instead of
//! overwriting newer results.

use std::error::Error;
use std::fmt::Display;

use chrono::NaiveDate;

use crate::binding;
use crate::payload::DashboardPayload;
use crate::range;
use crate::range::Range;
use crate::range::Selection;
use crate::registry::ChartBackend;
use crate::registry::ChartRegistry;
use crate::view::ViewPort;

/// A source of dashboard payloads.
pub trait PayloadSource {
    /// The error returned when a payload cannot be loaded.
    type Error: Error;

    /// Loads the payload for a time range.
    fn load(&self, range: Range) -> Result<DashboardPayload, Self::Error>;
}

/// Identifies one load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    range: Range,
}

impl LoadTicket {
    /// The range the cycle loads.
    pub fn range(&self) -> Range {
        self.range
    }
}

/// How a load cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The payload was rendered.
    Rendered,
    /// The payload could not be loaded; nothing was rendered.
    Aborted(String),
    /// A newer cycle was started before this one completed; nothing was rendered.
    Superseded,
}

impl Display for LoadOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadOutcome::Rendered => write!(f, "rendered"),
            LoadOutcome::Aborted(reason) => write!(f, "aborted: {reason}"),
            LoadOutcome::Superseded => write!(f, "superseded by a newer load"),
        }
    }
}

/// The controller of a dashboard page.
pub struct Dashboard<V: ViewPort, B: ChartBackend> {
    view: V,
    charts: ChartRegistry<B>,
    generation: u64,
}

impl<V: ViewPort, B: ChartBackend> Dashboard<V, B> {
    /// Creates a controller with an empty chart registry.
    pub fn new(view: V, backend: B) -> Dashboard<V, B> {
        Self {
            view,
            charts: ChartRegistry::new(backend),
            generation: 0,
        }
    }

    /// Shows the preview of a preset range.
    pub fn show_range(&mut self, range: Range, today: NaiveDate) {
        range::show_preview(&mut self.view, range, today);
    }

    /// Shows or hides the custom range inputs of the static dashboard.
    pub fn show_selection(&mut self, selection: Selection) {
        range::show_custom_inputs(&mut self.view, selection);
    }

    /// Starts a load cycle, superseding every cycle started before.
    pub fn begin_load(&mut self, range: Range) -> LoadTicket {
        self.generation += 1;

        LoadTicket {
            generation: self.generation,
            range,
        }
    }

    /// Completes a load cycle.
    ///
    /// The payload is rendered only if `ticket` belongs to the latest cycle
    /// and the load succeeded. A failed load is logged and leaves every
    /// widget as it was.
    pub fn complete_load<E: Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<DashboardPayload, E>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.generation,
                range = %ticket.range,
                "discarding a superseded load"
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(payload) => {
                self.render(&payload);
                LoadOutcome::Rendered
            }
            Err(error) => {
                tracing::error!(range = %ticket.range, %error, "loading the dashboard data failed");
                LoadOutcome::Aborted(error.to_string())
            }
        }
    }

    /// Runs a whole load cycle against a payload source.
    pub fn load<S: PayloadSource>(&mut self, source: &S, range: Range) -> LoadOutcome {
        let ticket = self.begin_load(range);
        let result = source.load(range);
        self.complete_load(ticket, result)
    }

    /// Previews the range and loads it, as on page load or a range change.
    pub fn refresh<S: PayloadSource>(&mut self, source: &S, range: Range, today: NaiveDate) -> LoadOutcome {
        self.show_range(range, today);
        self.load(source, range)
    }

    /// Renders every section of a payload.
    pub fn render(&mut self, payload: &DashboardPayload) {
        binding::render_payload(&mut self.view, &mut self.charts, payload);
        tracing::debug!(charts = self.charts.len(), "rendered the dashboard");
    }

    /// The view port.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The chart registry.
    pub fn charts(&self) -> &ChartRegistry<B> {
        &self.charts
    }

    /// Disposes every chart and returns the view port.
    pub fn into_view(mut self) -> V {
        self.charts.clear();
        self.view
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use crate::binding::ids;
    use crate::id::ElementId;
    use crate::registry::tests::RecordingBackend;
    use crate::sample;
    use crate::view::tests::RecordingView;

    #[derive(Debug)]
    struct Unavailable;

    impl fmt::Display for Unavailable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "HTTP 500")
        }
    }

    impl Error for Unavailable {}

    struct FailingSource;

    impl PayloadSource for FailingSource {
        type Error = Unavailable;

        fn load(&self, _range: Range) -> Result<DashboardPayload, Unavailable> {
            Err(Unavailable)
        }
    }

    fn dashboard() -> Dashboard<RecordingView, RecordingBackend> {
        let charts = ids::CHARTS;
        let canvases: Vec<&str> = charts.iter().map(ElementId::as_str).collect();
        let mut view = RecordingView::with_canvases(&canvases);
        view.texts.insert(String::from("avg_fetal_pcb"), None);
        view.texts.insert(String::from("rangePreview"), None);
        Dashboard::new(view, RecordingBackend::default())
    }

    #[test]
    fn failed_load_renders_nothing() {
        let mut dashboard = dashboard();
        dashboard.render(&sample::payload());
        let created = dashboard.charts().backend().created.len();
        let summary = dashboard.view().text("avg_fetal_pcb").map(str::to_owned);

        let outcome = dashboard.load(&FailingSource, Range::Week);

        assert_eq!(outcome, LoadOutcome::Aborted(String::from("HTTP 500")));
        assert_eq!(dashboard.charts().backend().created.len(), created);
        assert!(dashboard.charts().backend().disposed.is_empty());
        assert_eq!(
            dashboard.view().text("avg_fetal_pcb").map(str::to_owned),
            summary
        );
    }

    #[test]
    fn superseded_load_is_discarded() {
        let mut dashboard = dashboard();

        let first = dashboard.begin_load(Range::Week);
        let second = dashboard.begin_load(Range::Month);

        let mut newer = sample::payload();
        newer.summary = Some(
            [(String::from("avg_fetal_pcb"), serde_json::json!(2.0))]
                .into_iter()
                .collect(),
        );

        assert_eq!(
            dashboard.complete_load::<Unavailable>(second, Ok(newer)),
            LoadOutcome::Rendered
        );
        assert_eq!(
            dashboard.complete_load::<Unavailable>(first, Ok(sample::payload())),
            LoadOutcome::Superseded
        );
        assert_eq!(dashboard.view().text("avg_fetal_pcb"), Some("2.00"));
        assert_eq!(second.range(), Range::Month);
    }

    #[test]
    fn refresh_shows_the_range_preview() {
        let mut dashboard = dashboard();
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        dashboard.refresh(&sample::SampleSource, Range::Week, today);

        assert_eq!(
            dashboard.view().text("rangePreview"),
            Some("Showing: 2024-01-24 → 2024-01-31")
        );
        assert_eq!(dashboard.charts().len(), ids::CHARTS.len());
    }
}
