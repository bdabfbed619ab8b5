//! The static sample dashboard.
//!
//! The sample dashboard has no network step: every chart is drawn from the
//! data inlined below, whatever range is selected.

use std::convert::Infallible;

use serde_json::json;

use crate::dashboard::PayloadSource;
use crate::payload::ConcentrationSeries;
use crate::payload::CorrelationMatrix;
use crate::payload::DashboardPayload;
use crate::payload::Demographics;
use crate::payload::Environment;
use crate::payload::LabeledValues;
use crate::payload::PcbLevels;
use crate::payload::Point;
use crate::payload::ResearchItem;
use crate::payload::RiskDistribution;
use crate::range::Range;

const PCB_CONGENERS: [&str; 10] = [
    "PCB_118", "PCB_138", "PCB_153", "PCB_180", "PCB_74", "PCB_99", "PCB_156", "PCB_170",
    "PCB_183", "PCB_187",
];

/// Serves the inlined sample payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleSource;

impl PayloadSource for SampleSource {
    type Error = Infallible;

    fn load(&self, _range: Range) -> Result<DashboardPayload, Infallible> {
        Ok(payload())
    }
}

/// The sample payload.
pub fn payload() -> DashboardPayload {
    DashboardPayload {
        summary: Some(
            [
                ("total_patients", json!(128)),
                ("high_risk", json!(17)),
                ("top_pcb", json!("PCB_153")),
                ("top_pcb_avg", json!(0.842)),
                ("avg_fetal_pcb", json!(3.215)),
                ("correlation", json!(0.611)),
            ]
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value))
            .collect(),
        ),
        avg_pcb_levels: Some(PcbLevels {
            labels: labels(&PCB_CONGENERS),
            maternal: vec![0.61, 0.93, 1.27, 0.88, 0.22, 0.18, 0.14, 0.31, 0.09, 0.12],
            fetal: vec![0.34, 0.58, 0.84, 0.52, 0.11, 0.09, 0.07, 0.17, 0.04, 0.06],
        }),
        risk_distribution: Some(RiskDistribution {
            labels: labels(&PCB_CONGENERS),
            risk_low: vec![98.0, 84.0, 71.0, 90.0, 120.0, 122.0, 125.0, 110.0, 127.0, 126.0],
            risk_med: vec![22.0, 31.0, 40.0, 27.0, 7.0, 5.0, 3.0, 15.0, 1.0, 2.0],
            risk_high: vec![8.0, 13.0, 17.0, 11.0, 1.0, 1.0, 0.0, 3.0, 0.0, 0.0],
        }),
        concentration_series: Some(ConcentrationSeries {
            labels: labels(&["P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8"]),
            maternal_series: vec![0.42, 0.55, 0.61, 0.38, 0.72, 0.49, 0.66, 0.58],
            fetal_series: vec![0.21, 0.30, 0.36, 0.18, 0.44, 0.27, 0.39, 0.31],
        }),
        demographics: Some(Demographics {
            pcb_by_age: Some(LabeledValues {
                labels: labels(&["<25", "25-30", "31-35", "36-40", "41+"]),
                values: vec![2.41, 2.87, 3.30, 3.62, 4.05],
            }),
            scatter_total_vs_age: Some(points(&[
                (22.0, 2.1),
                (26.0, 2.6),
                (29.0, 2.9),
                (31.0, 3.1),
                (33.0, 3.5),
                (35.0, 3.3),
                (38.0, 3.9),
                (42.0, 4.2),
            ])),
            pcb_by_bmi: Some(LabeledValues {
                labels: labels(&["Underweight", "Normal", "Overweight"]),
                values: vec![2.64, 3.05, 3.71],
            }),
            smoking_comparison: Some(LabeledValues {
                labels: labels(&["Non-smokers", "Smokers"]),
                values: vec![3.02, 3.88],
            }),
            correlation_heatmap: Some(CorrelationMatrix {
                labels: labels(&["Diet", "Smoking", "BMI", "Age", "mPCB"]),
                matrix: vec![
                    vec![1.0, -0.08, 0.12, 0.05, 0.41],
                    vec![-0.08, 1.0, 0.03, -0.11, 0.22],
                    vec![0.12, 0.03, 1.0, 0.18, 0.27],
                    vec![0.05, -0.11, 0.18, 1.0, 0.35],
                    vec![0.41, 0.22, 0.27, 0.35, 1.0],
                ],
            }),
        }),
        environment: Some(Environment {
            exposure_contribution: Some(LabeledValues {
                labels: labels(&[
                    "Chemical exposure",
                    "Coffee",
                    "Tea",
                    "BMI",
                    "Smoking",
                    "Maternal Education",
                ]),
                values: vec![0.38, 0.12, 0.07, 0.21, 0.26, 0.09],
            }),
            dietary_patterns: Some(LabeledValues {
                labels: labels(&["Low dairy", "Medium dairy", "High dairy"]),
                values: vec![2.71, 3.18, 3.94],
            }),
            lifestyle_clusters: Some(points(&[
                (24.0, 2.3),
                (27.0, 2.5),
                (30.0, 3.4),
                (32.0, 2.8),
                (34.0, 3.9),
                (37.0, 3.6),
                (40.0, 4.4),
            ])),
        }),
        research: Some(vec![
            research(
                "Placental transfer of polychlorinated biphenyls",
                2023,
                "Jensen, M.; Koppe, J.",
                "https://pubmed.ncbi.nlm.nih.gov/?term=placental+transfer+pcb",
            ),
            research(
                "Dairy intake and persistent organic pollutants in pregnancy",
                2021,
                "Alvarez, R.; Chen, L.",
                "https://pubmed.ncbi.nlm.nih.gov/?term=dairy+pcb+pregnancy",
            ),
            research(
                "Maternal smoking and cord blood PCB concentrations",
                2019,
                "Novak, P.",
                "https://pubmed.ncbi.nlm.nih.gov/?term=smoking+cord+blood+pcb",
            ),
        ]),
    }
}

fn labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

fn points(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Point { x, y }).collect()
}

fn research(title: &str, year: u16, authors: &str, link: &str) -> ResearchItem {
    ResearchItem {
        title: Some(title.to_owned()),
        year: Some(json!(year)),
        authors: Some(authors.to_owned()),
        link: Some(link.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_series_are_aligned() {
        let payload = payload();

        let levels = payload.avg_pcb_levels.unwrap();
        assert_eq!(levels.labels.len(), levels.maternal.len());
        assert_eq!(levels.labels.len(), levels.fetal.len());

        let heatmap = payload.demographics.unwrap().correlation_heatmap.unwrap();
        assert_eq!(heatmap.matrix.len(), heatmap.labels.len());
        assert!(heatmap.matrix.iter().all(|row| row.len() == heatmap.labels.len()));
    }

    #[test]
    fn source_ignores_the_range() {
        let week = SampleSource.load(Range::Week).unwrap();
        let all = SampleSource.load(Range::All).unwrap();

        assert_eq!(week, all);
    }
}
