//! Exposure and risk pattern charts.

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
use crate::payload::ConcentrationSeries;
use crate::payload::PcbLevels;
use crate::payload::RiskDistribution;
use crate::registry::ChartBackend;
use crate::registry::ChartRegistry;
use crate::view::ViewPort;

/// Draws the grouped bar chart of maternal and fetal averages.
pub fn render_avg_pcb_levels<V, B>(view: &mut V, charts: &mut ChartRegistry<B>, levels: Option<&PcbLevels>)
where
    V: ViewPort,
    B: ChartBackend,
{
    let Some(levels) = levels else {
        return;
    };

    draw(view, charts, &ids::AVG_PCB, avg_pcb_levels(levels));
}

/// Draws the stacked bar chart of risk classes.
pub fn render_risk_distribution<V, B>(
    view: &mut V,
    charts: &mut ChartRegistry<B>,
    distribution: Option<&RiskDistribution>,
) where
    V: ViewPort,
    B: ChartBackend,
{
    let Some(distribution) = distribution else {
        return;
    };

    draw(view, charts, &ids::RISK_DISTRIBUTION, risk_distribution(distribution));
}

/// Draws the line chart of per patient concentrations.
pub fn render_concentration_series<V, B>(
    view: &mut V,
    charts: &mut ChartRegistry<B>,
    series: Option<&ConcentrationSeries>,
) where
    V: ViewPort,
    B: ChartBackend,
{
    let Some(series) = series else {
        return;
    };

    draw(view, charts, &ids::CONCENTRATION, concentration_series(series));
}

pub(crate) fn avg_pcb_levels(levels: &PcbLevels) -> ChartConfig {
    let data = ChartData::new(levels.labels.clone())
        .dataset(
            Dataset::new(Values::Numbers(levels.maternal.clone()))
                .label("Maternal")
                .background(Colors::Single(palette::MATERNAL)),
        )
        .dataset(
            Dataset::new(Values::Numbers(levels.fetal.clone()))
                .label("Fetal")
                .background(Colors::Single(palette::FETAL)),
        );

    ChartConfig::new(ChartKind::Bar, data)
        .title("Average PCB levels")
        .scales(Scales::new(Axis::new(), Axis::new().from_zero().title("ng/g")))
}

pub(crate) fn risk_distribution(distribution: &RiskDistribution) -> ChartConfig {
    let data = ChartData::new(distribution.labels.clone())
        .dataset(
            Dataset::new(Values::Numbers(distribution.risk_low.clone()))
                .label("Low")
                .background(Colors::Single(palette::LOW)),
        )
        .dataset(
            Dataset::new(Values::Numbers(distribution.risk_med.clone()))
                .label("Medium")
                .background(Colors::Single(palette::MEDIUM)),
        )
        .dataset(
            Dataset::new(Values::Numbers(distribution.risk_high.clone()))
                .label("High")
                .background(Colors::Single(palette::HIGH)),
        );

    ChartConfig::new(ChartKind::Bar, data)
        .title("Risk distribution by PCB")
        .scales(Scales::new(Axis::new().stacked(), Axis::new().stacked()))
}

pub(crate) fn concentration_series(series: &ConcentrationSeries) -> ChartConfig {
    let data = ChartData::new(series.labels.clone())
        .dataset(
            Dataset::new(Values::Numbers(series.maternal_series.clone()))
                .label("Maternal")
                .border(Colors::Single(palette::MATERNAL))
                .line(0.3),
        )
        .dataset(
            Dataset::new(Values::Numbers(series.fetal_series.clone()))
                .label("Fetal")
                .border(Colors::Single(palette::FETAL))
                .line(0.3),
        );

    ChartConfig::new(ChartKind::Line, data)
        .title("Maternal vs fetal concentration")
        .scales(Scales::new(
            Axis::new().title("Patient"),
            Axis::new().from_zero().title("Average PCB"),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::RecordingBackend;
    use crate::view::tests::RecordingView;

    fn labels() -> Vec<String> {
        vec![String::from("PCB_118"), String::from("PCB_138")]
    }

    #[test]
    fn grouped_bars_pass_series_through() {
        let levels = PcbLevels {
            labels: labels(),
            maternal: vec![0.5, 0.7],
            fetal: vec![0.2, 0.1],
        };

        let config = avg_pcb_levels(&levels);

        assert_eq!(config.kind(), ChartKind::Bar);
        assert_eq!(config.data().labels(), labels().as_slice());
        let datasets = config.data().datasets();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].values(), &Values::Numbers(vec![0.5, 0.7]));
        assert_eq!(datasets[1].values(), &Values::Numbers(vec![0.2, 0.1]));
        assert!(!config.options().scales().unwrap().x().is_stacked());
    }

    #[test]
    fn stacked_bars_stack_both_axes() {
        let distribution = RiskDistribution {
            labels: labels(),
            risk_low: vec![3.0, 1.0],
            risk_med: vec![2.0, 2.0],
            risk_high: vec![0.0, 4.0],
        };

        let config = risk_distribution(&distribution);

        let scales = config.options().scales().unwrap();
        assert!(scales.x().is_stacked());
        assert!(scales.y().is_stacked());
        let labels: Vec<_> = config
            .data()
            .datasets()
            .iter()
            .map(|d| d.label_text().unwrap())
            .collect();
        assert_eq!(labels, vec!["Low", "Medium", "High"]);
    }

    #[test]
    fn mismatched_lengths_are_passed_through() {
        let series = ConcentrationSeries {
            labels: vec![String::from("P1")],
            maternal_series: vec![1.0, 2.0],
            fetal_series: vec![],
        };

        let config = concentration_series(&series);

        assert_eq!(config.kind(), ChartKind::Line);
        assert_eq!(
            config.data().datasets()[0].values(),
            &Values::Numbers(vec![1.0, 2.0])
        );
    }

    #[test]
    fn absent_section_does_not_touch_the_registry() {
        let mut view = RecordingView::with_canvases(&["avgPcbChart"]);
        let mut charts = ChartRegistry::new(RecordingBackend::default());

        render_avg_pcb_levels(&mut view, &mut charts, None);

        assert!(charts.is_empty());
    }
}
