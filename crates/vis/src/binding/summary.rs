//! Summary metric text fields.

use crate::format::MetricFormat;
use crate::id::ElementId;
use crate::payload::SummaryMetrics;
use crate::view::ViewPort;

/// The summary metrics and how each is displayed. The text element of a
/// metric is named after the metric.
pub const METRICS: [(&str, MetricFormat); 6] = [
    ("total_patients", MetricFormat::Count),
    ("high_risk", MetricFormat::Count),
    ("top_pcb", MetricFormat::Label),
    ("top_pcb_avg", MetricFormat::Decimal),
    ("avg_fetal_pcb", MetricFormat::Decimal),
    ("correlation", MetricFormat::Decimal),
];

/// Writes the summary metrics into their text elements.
pub fn render_summary<V: ViewPort>(view: &mut V, summary: Option<&SummaryMetrics>) {
    let Some(summary) = summary else {
        return;
    };

    for (name, format) in METRICS {
        let text = format.format(summary.get(name));
        view.set_text(&ElementId::new(name), &text);
    }
}
