//! Environment and lifestyle charts.

use crate::binding::demographics::scatter;
use crate::binding::draw;
use crate::binding::ids;
use crate::chart::ChartConfig;
use crate::chart::ChartData;
use crate::chart::ChartKind;
use crate::chart::Colors;
use crate::chart::Dataset;
use crate::chart::Values;
use crate::chart::axes::Axis;
use crate::chart::axes::Scales;
use crate::chart::palette;
use crate::payload::Environment;
use crate::payload::LabeledValues;
use crate::payload::Point;
use crate::registry::ChartBackend;
use crate::registry::ChartRegistry;
use crate::view::ViewPort;

/// Draws every chart of the environment section.
pub fn render_environment<V, B>(view: &mut V, charts: &mut ChartRegistry<B>, environment: &Environment)
where
    V: ViewPort,
    B: ChartBackend,
{
    if let Some(contribution) = &environment.exposure_contribution {
        draw(view, charts, &ids::EXPOSURE, exposure_contribution(contribution));
    }

    if let Some(patterns) = &environment.dietary_patterns {
        draw(view, charts, &ids::DIET, dietary_patterns(patterns));
    }

    if let Some(points) = &environment.lifestyle_clusters {
        draw(view, charts, &ids::LIFESTYLE, lifestyle_clusters(points));
    }
}

fn exposure_contribution(contribution: &LabeledValues) -> ChartConfig {
    let colors = palette::categorical(contribution.values.len());
    let data = ChartData::new(contribution.labels.clone()).dataset(
        Dataset::new(Values::Numbers(contribution.values.clone()))
            .label("|r| with total fetal PCB")
            .background(Colors::PerPoint(colors)),
    );

    ChartConfig::new(ChartKind::PolarArea, data).title("Exposure contribution")
}

fn dietary_patterns(patterns: &LabeledValues) -> ChartConfig {
    let data = ChartData::new(patterns.labels.clone()).dataset(
        Dataset::new(Values::Numbers(patterns.values.clone()))
            .label("Average total fetal PCB")
            .background(Colors::Single(palette::LOW)),
    );

    ChartConfig::new(ChartKind::Bar, data)
        .title("Dietary patterns")
        .hide_legend()
        .scales(Scales::new(Axis::new(), Axis::new().from_zero()))
}

fn lifestyle_clusters(points: &[Point]) -> ChartConfig {
    scatter(points, "Patients", "Age").title("Lifestyle clusters")
}
