//! Renderers binding payload sections to dashboard widgets.
//!
//! Every renderer receives one payload section and no-ops when the section is
//! absent. Chart renderers follow the same protocol: resolve the canvas through
//! the view port (no-op if the page has none), dispose the live chart of that
//! canvas, then create the replacement. [draw] implements that protocol.

pub mod demographics;
pub mod environment;
pub mod exposure;
pub mod research;
pub mod summary;

use crate::chart::ChartConfig;
use crate::id::ElementId;
use crate::payload::DashboardPayload;
use crate::registry::ChartBackend;
use crate::registry::ChartRegistry;
use crate::view::ViewPort;

/// Canvas identifiers of the dashboard charts.
pub mod ids {
    use crate::id::ElementId;

    /// Average maternal vs fetal level per congener.
    pub const AVG_PCB: ElementId = ElementId::new("avgPcbChart");
    /// Risk classes per congener.
    pub const RISK_DISTRIBUTION: ElementId = ElementId::new("riskDistChart");
    /// Per patient maternal vs fetal concentration.
    pub const CONCENTRATION: ElementId = ElementId::new("concentrationChart");
    /// Total fetal PCB per age group.
    pub const AGE_GROUPS: ElementId = ElementId::new("ageGroupChart");
    /// Total fetal PCB against maternal age.
    pub const AGE_SCATTER: ElementId = ElementId::new("ageScatterChart");
    /// Total fetal PCB per BMI class.
    pub const BMI: ElementId = ElementId::new("bmiChart");
    /// Smokers vs non-smokers.
    pub const SMOKING: ElementId = ElementId::new("smokingChart");
    /// Correlation matrix of the model inputs.
    pub const CORRELATION_HEATMAP: ElementId = ElementId::new("correlationHeatmap");
    /// Contribution of the exposure factors.
    pub const EXPOSURE: ElementId = ElementId::new("exposureChart");
    /// Total fetal PCB per dairy intake class.
    pub const DIET: ElementId = ElementId::new("dietChart");
    /// Lifestyle clusters.
    pub const LIFESTYLE: ElementId = ElementId::new("lifestyleChart");
    /// Related research.
    pub const RESEARCH: ElementId = ElementId::new("researchList");

    /// Every chart canvas of the dashboard.
    pub const CHARTS: [ElementId; 11] = [
        AVG_PCB,
        RISK_DISTRIBUTION,
        CONCENTRATION,
        AGE_GROUPS,
        AGE_SCATTER,
        BMI,
        SMOKING,
        CORRELATION_HEATMAP,
        EXPOSURE,
        DIET,
        LIFESTYLE,
    ];
}

/// Renders every section of a payload.
pub fn render_payload<V, B>(view: &mut V, charts: &mut ChartRegistry<B>, payload: &DashboardPayload)
where
    V: ViewPort,
    B: ChartBackend,
{
    summary::render_summary(view, payload.summary.as_ref());

    exposure::render_avg_pcb_levels(view, charts, payload.avg_pcb_levels.as_ref());
    exposure::render_risk_distribution(view, charts, payload.risk_distribution.as_ref());
    exposure::render_concentration_series(view, charts, payload.concentration_series.as_ref());

    if let Some(demographics) = &payload.demographics {
        demographics::render_demographics(view, charts, demographics);
    }

    if let Some(environment) = &payload.environment {
        environment::render_environment(view, charts, environment);
    }

    research::render_research(view, payload.research.as_deref());
}

/// Draws a chart onto a canvas, replacing the chart it already shows.
///
/// Returns `false` if the page has no such canvas.
pub fn draw<V, B>(view: &mut V, charts: &mut ChartRegistry<B>, id: &ElementId, config: ChartConfig) -> bool
where
    V: ViewPort,
    B: ChartBackend,
{
    let Some(surface) = view.drawing_surface(id) else {
        tracing::debug!(%id, "the page has no canvas for the chart");
        return false;
    };

    charts.replace(surface, &config);
    tracing::debug!(%id, kind = ?config.kind(), "drew chart");

    true
}
