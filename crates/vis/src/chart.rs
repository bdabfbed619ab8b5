//! The chart configuration handed to the charting backend.
//!
//! The types serialize to the configuration object accepted by Chart.js:
//!
//! ```json
//! { "type": "bar", "data": { "labels": [...], "datasets": [...] }, "options": { ... } }
//! ```

pub mod axes;

use serde::Serialize;

use crate::chart::axes::Scales;

/// A complete chart description.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    kind: ChartKind,
    data: ChartData,
    options: ChartOptions,
}

impl ChartConfig {
    /// Creates a chart of the given kind with default options.
    pub fn new(kind: ChartKind, data: ChartData) -> ChartConfig {
        Self {
            kind,
            data,
            options: ChartOptions::new(),
        }
    }

    /// Sets the chart title.
    pub fn title(mut self, title: &str) -> ChartConfig {
        self.options.plugins.title = Some(Title::new(title));
        self
    }

    /// Hides the legend.
    pub fn hide_legend(mut self) -> ChartConfig {
        self.options.plugins.legend.display = false;
        self
    }

    /// Sets the axes of a cartesian chart.
    pub fn scales(mut self, scales: Scales) -> ChartConfig {
        self.options.scales = Some(scales);
        self
    }

    #[allow(missing_docs)]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[allow(missing_docs)]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    #[allow(missing_docs)]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }
}

/// The kind of a chart.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
    Bubble,
    Pie,
    PolarArea,
}

/// The labels and datasets of a chart.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    labels: Vec<String>,
    datasets: Vec<Dataset>,
}

impl ChartData {
    /// Creates chart data over the given category labels.
    pub fn new(labels: Vec<String>) -> ChartData {
        Self {
            labels,
            datasets: Vec::new(),
        }
    }

    /// Appends a dataset.
    pub fn dataset(mut self, dataset: Dataset) -> ChartData {
        self.datasets.push(dataset);
        self
    }

    #[allow(missing_docs)]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[allow(missing_docs)]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }
}

/// A single series of a chart.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    data: Values,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_color: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tension: Option<f64>,
}

impl Dataset {
    /// Creates an unlabeled dataset.
    pub fn new(data: Values) -> Dataset {
        Self {
            label: None,
            data,
            background_color: None,
            border_color: None,
            fill: None,
            tension: None,
        }
    }

    /// Sets the legend label.
    pub fn label(mut self, label: &str) -> Dataset {
        self.label = Some(label.to_owned());
        self
    }

    /// Sets the fill colour.
    pub fn background(mut self, colors: Colors) -> Dataset {
        self.background_color = Some(colors);
        self
    }

    /// Sets the border colour.
    pub fn border(mut self, colors: Colors) -> Dataset {
        self.border_color = Some(colors);
        self
    }

    /// Draws a line without filling the area below it.
    pub fn line(mut self, tension: f64) -> Dataset {
        self.fill = Some(false);
        self.tension = Some(tension);
        self
    }

    #[allow(missing_docs)]
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[allow(missing_docs)]
    pub fn values(&self) -> &Values {
        &self.data
    }

    #[allow(missing_docs)]
    pub fn background_color(&self) -> Option<&Colors> {
        self.background_color.as_ref()
    }
}

/// The data points of a dataset.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Values {
    /// One value per category label.
    Numbers(Vec<f64>),
    /// Points of a scatter chart.
    Points(Vec<XY>),
    /// Points of a bubble chart.
    Bubbles(Vec<Bubble>),
}

/// A point of a scatter chart.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[allow(missing_docs)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

/// A point of a bubble chart.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    /// The horizontal position.
    pub x: f64,
    /// The vertical position.
    pub y: f64,
    /// The radius in pixels.
    pub r: f64,
}

/// A colour shared by a whole dataset or set per data point.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Colors {
    /// A single colour for every data point.
    Single(&'static str),
    /// One colour per data point.
    PerPoint(Vec<&'static str>),
}

/// The colours used by the dashboard.
pub mod palette {
    /// Maternal series.
    pub const MATERNAL: &str = "rgba(54, 162, 235, 0.7)";
    /// Fetal series.
    pub const FETAL: &str = "rgba(255, 99, 132, 0.7)";
    /// Low risk.
    pub const LOW: &str = "rgba(75, 192, 192, 0.7)";
    /// Medium risk.
    pub const MEDIUM: &str = "rgba(255, 206, 86, 0.7)";
    /// High risk.
    pub const HIGH: &str = "rgba(255, 99, 132, 0.7)";
    /// Non-negative correlation.
    pub const POSITIVE: &str = "rgba(54, 162, 235, 0.6)";
    /// Negative correlation.
    pub const NEGATIVE: &str = "rgba(255, 99, 132, 0.6)";
    /// Single-series charts.
    pub const ACCENT: &str = "rgba(153, 102, 255, 0.7)";

    /// Slice colours of pie and polar area charts, cycled when a chart
    /// has more slices.
    pub const CATEGORICAL: [&str; 6] = [
        "rgba(54, 162, 235, 0.7)",
        "rgba(255, 99, 132, 0.7)",
        "rgba(255, 206, 86, 0.7)",
        "rgba(75, 192, 192, 0.7)",
        "rgba(153, 102, 255, 0.7)",
        "rgba(255, 159, 64, 0.7)",
    ];

    /// Picks one categorical colour per slice.
    pub fn categorical(count: usize) -> Vec<&'static str> {
        CATEGORICAL.iter().copied().cycle().take(count).collect()
    }
}

/// The options of a chart.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    responsive: bool,
    maintain_aspect_ratio: bool,
    plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    scales: Option<Scales>,
}

impl ChartOptions {
    fn new() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins::default(),
            scales: None,
        }
    }

    #[allow(missing_docs)]
    pub fn scales(&self) -> Option<&Scales> {
        self.scales.as_ref()
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
struct Plugins {
    legend: Legend,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Title>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct Legend {
    display: bool,
}

impl Default for Legend {
    fn default() -> Self {
        Self { display: true }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct Title {
    display: bool,
    text: String,
}

impl Title {
    fn new(text: &str) -> Self {
        Self {
            display: true,
            text: text.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::chart::axes::Axis;

    #[test]
    fn serialize_bar_chart() {
        let data = ChartData::new(vec![String::from("A"), String::from("B")]).dataset(
            Dataset::new(Values::Numbers(vec![1.0, 2.5]))
                .label("Maternal")
                .background(Colors::Single(palette::MATERNAL)),
        );
        let config = ChartConfig::new(ChartKind::Bar, data)
            .title("Levels")
            .scales(Scales::new(Axis::new().stacked(), Axis::new().stacked()));

        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["labels"], json!(["A", "B"]));
        assert_eq!(value["data"]["datasets"][0]["label"], "Maternal");
        assert_eq!(value["data"]["datasets"][0]["data"], json!([1.0, 2.5]));
        assert_eq!(
            value["data"]["datasets"][0]["backgroundColor"],
            palette::MATERNAL
        );
        assert_eq!(value["options"]["plugins"]["title"]["text"], "Levels");
        assert_eq!(value["options"]["scales"]["x"]["stacked"], true);
        assert_eq!(value["options"]["scales"]["y"]["stacked"], true);
        assert_eq!(value["options"]["maintainAspectRatio"], false);
    }

    #[test]
    fn serialize_polar_area_kind() {
        let config = ChartConfig::new(ChartKind::PolarArea, ChartData::default());

        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["type"], "polarArea");
        assert!(value["data"].get("labels").is_none());
        assert!(value["options"].get("scales").is_none());
    }

    #[test]
    fn serialize_bubbles() {
        let values = Values::Bubbles(vec![Bubble {
            x: 1.0,
            y: 2.0,
            r: 8.0,
        }]);

        let value = serde_json::to_value(&values).unwrap();

        assert_eq!(value, json!([{ "x": 1.0, "y": 2.0, "r": 8.0 }]));
    }

    #[test]
    fn categorical_colors_cycle() {
        let colors = palette::categorical(8);

        assert_eq!(colors.len(), 8);
        assert_eq!(colors[6], palette::CATEGORICAL[0]);
    }
}
