//! Demographic correlation charts.

use crate::binding::draw;
use crate::binding::ids;
use crate::chart::Bubble;
use crate::chart::ChartConfig;
use crate::chart::ChartData;
use crate::chart::ChartKind;
use crate::chart::Colors;
use crate::chart::Dataset;
use crate::chart::Values;
use crate::chart::XY;
use crate::chart::axes::Axis;
use crate::chart::axes::Scales;
use crate::chart::palette;
use crate::payload::CorrelationMatrix;
use crate::payload::Demographics;
use crate::payload::LabeledValues;
use crate::payload::Point;
use crate::registry::ChartBackend;
use crate::registry::ChartRegistry;
use crate::view::ViewPort;

const MIN_BUBBLE_RADIUS: f64 = 2.0;
const BUBBLE_SCALE: f64 = 16.0;

/// Draws every chart of the demographics section.
pub fn render_demographics<V, B>(view: &mut V, charts: &mut ChartRegistry<B>, demographics: &Demographics)
where
    V: ViewPort,
    B: ChartBackend,
{
    if let Some(by_age) = &demographics.pcb_by_age {
        draw(view, charts, &ids::AGE_GROUPS, age_groups(by_age));
    }

    if let Some(points) = &demographics.scatter_total_vs_age {
        draw(view, charts, &ids::AGE_SCATTER, age_scatter(points));
    }

    if let Some(by_bmi) = &demographics.pcb_by_bmi {
        draw(view, charts, &ids::BMI, bmi(by_bmi));
    }

    if let Some(smoking) = &demographics.smoking_comparison {
        draw(view, charts, &ids::SMOKING, smoking_comparison(smoking));
    }

    if let Some(matrix) = &demographics.correlation_heatmap {
        draw(view, charts, &ids::CORRELATION_HEATMAP, correlation_heatmap(matrix));
    }
}

fn age_groups(by_age: &LabeledValues) -> ChartConfig {
    let data = ChartData::new(by_age.labels.clone()).dataset(
        Dataset::new(Values::Numbers(by_age.values.clone()))
            .label("Average total fetal PCB")
            .background(Colors::Single(palette::ACCENT)),
    );

    ChartConfig::new(ChartKind::Bar, data)
        .title("PCB by maternal age")
        .hide_legend()
        .scales(Scales::new(
            Axis::new().title("Age group"),
            Axis::new().from_zero(),
        ))
}

pub(crate) fn scatter(points: &[Point], label: &str, x_title: &str) -> ChartConfig {
    let points = points.iter().map(|p| XY { x: p.x, y: p.y }).collect();
    let data = ChartData::default().dataset(
        Dataset::new(Values::Points(points))
            .label(label)
            .background(Colors::Single(palette::MATERNAL)),
    );

    ChartConfig::new(ChartKind::Scatter, data).scales(Scales::new(
        Axis::new().title(x_title),
        Axis::new().title("Total fetal PCB"),
    ))
}

fn age_scatter(points: &[Point]) -> ChartConfig {
    scatter(points, "Patients", "Maternal age").title("Total fetal PCB vs age")
}

fn bmi(by_bmi: &LabeledValues) -> ChartConfig {
    let colors = palette::categorical(by_bmi.values.len());
    let data = ChartData::new(by_bmi.labels.clone())
        .dataset(Dataset::new(Values::Numbers(by_bmi.values.clone())).background(Colors::PerPoint(colors)));

    ChartConfig::new(ChartKind::Pie, data).title("PCB by BMI")
}

fn smoking_comparison(smoking: &LabeledValues) -> ChartConfig {
    let data = ChartData::new(smoking.labels.clone()).dataset(
        Dataset::new(Values::Numbers(smoking.values.clone()))
            .label("Average total fetal PCB")
            .background(Colors::PerPoint(vec![palette::LOW, palette::HIGH])),
    );

    ChartConfig::new(ChartKind::Bar, data)
        .title("Smokers vs non-smokers")
        .hide_legend()
        .scales(Scales::new(Axis::new(), Axis::new().from_zero()))
}

/// Lays a correlation matrix out as a bubble grid.
///
/// Cell `(i, j)` becomes a bubble at `(j + 1, i + 1)` whose radius grows
/// with the absolute correlation and whose colour encodes its sign. Both axes
/// span `[0.5, n + 0.5]` so every bubble sits centred in its unit cell.
pub fn correlation_heatmap(matrix: &CorrelationMatrix) -> ChartConfig {
    let (bubbles, colors) = bubble_grid(&matrix.matrix);
    let n = matrix.labels.len() as f64;

    let data = ChartData::default().dataset(
        Dataset::new(Values::Bubbles(bubbles))
            .label("Correlation")
            .background(Colors::PerPoint(colors)),
    );

    let axis = || Axis::new().bounds(0.5, n + 0.5).label_ticks(&matrix.labels);

    ChartConfig::new(ChartKind::Bubble, data)
        .title("Correlation heatmap")
        .hide_legend()
        .scales(Scales::new(axis(), axis()))
}

fn bubble_grid(matrix: &[Vec<f64>]) -> (Vec<Bubble>, Vec<&'static str>) {
    matrix
        .iter()
        .enumerate()
        .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, value)| (i, j, *value)))
        .map(|(i, j, value)| {
            let bubble = Bubble {
                x: (j + 1) as f64,
                y: (i + 1) as f64,
                r: bubble_radius(value),
            };
            let color = if value >= 0.0 {
                palette::POSITIVE
            } else {
                palette::NEGATIVE
            };
            (bubble, color)
        })
        .unzip()
}

fn bubble_radius(value: f64) -> f64 {
    (value.abs() * BUBBLE_SCALE).max(MIN_BUBBLE_RADIUS)
}
