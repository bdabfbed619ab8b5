//! The charting backend of the HTML page.

use std::collections::BTreeMap;

use crate::chart::ChartConfig;
use crate::id::ElementId;
use crate::registry::ChartBackend;
use crate::view::DrawingSurface;

/// A chart drawn onto the page.
#[derive(Debug, PartialEq, Eq)]
pub struct HtmlChart {
    serial: u64,
}

/// Collects the charts a page draws on load.
///
/// A chart is drawn by a script of the page; disposing the chart drops
/// its script.
#[derive(Debug, Default)]
pub struct HtmlCharts {
    next: u64,
    live: BTreeMap<u64, (ElementId, ChartConfig)>,
}

impl HtmlCharts {
    /// Creates a backend without charts.
    pub fn new() -> HtmlCharts {
        Self::default()
    }

    /// The charts to draw, in the order they were created.
    pub fn scripts(&self) -> impl Iterator<Item = (&ElementId, &ChartConfig)> {
        self.live.values().map(|(id, config)| (id, config))
    }

    /// The configuration of the chart drawn onto a canvas.
    pub fn config(&self, id: &ElementId) -> Option<&ChartConfig> {
        self.scripts()
            .find(|(canvas, _)| *canvas == id)
            .map(|(_, config)| config)
    }

    /// The number of charts to draw.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl ChartBackend for HtmlCharts {
    type Instance = HtmlChart;

    fn create(&mut self, surface: DrawingSurface, config: &ChartConfig) -> HtmlChart {
        self.next += 1;
        self.live
            .insert(self.next, (surface.id().clone(), config.clone()));

        HtmlChart { serial: self.next }
    }

    fn dispose(&mut self, instance: HtmlChart) {
        if self.live.remove(&instance.serial).is_none() {
            tracing::warn!(serial = instance.serial, "disposing an unknown chart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartData;
    use crate::chart::ChartKind;

    #[test]
    fn disposed_charts_are_not_drawn() {
        let mut charts = HtmlCharts::new();
        let surface = DrawingSurface::new(ElementId::new("bmiChart"));

        let first = charts.create(surface.clone(), &ChartConfig::new(ChartKind::Bar, ChartData::default()));
        let _second = charts.create(surface, &ChartConfig::new(ChartKind::Pie, ChartData::default()));
        charts.dispose(first);

        assert_eq!(charts.len(), 1);
        assert_eq!(
            charts.config(&ElementId::new("bmiChart")).map(ChartConfig::kind),
            Some(ChartKind::Pie)
        );
    }
}
