//! The analytics payload served by the `/dashboard_data` endpoint.
//!
//! Every section of the payload is optional. A section that is present but
//! cannot be decoded is treated as absent, so a single malformed section
//! never prevents the rest of the dashboard from rendering.

use serde::Deserialize;
use serde::Deserializer;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;

/// The top-level response of the dashboard endpoint.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct DashboardPayload {
    /// Scalar summary metrics shown as text.
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<SummaryMetrics>,

    /// Average maternal and fetal level per PCB congener.
    #[serde(default, deserialize_with = "lenient")]
    pub avg_pcb_levels: Option<PcbLevels>,

    /// Risk class counts per PCB congener.
    #[serde(default, deserialize_with = "lenient")]
    pub risk_distribution: Option<RiskDistribution>,

    /// Per patient maternal and fetal averages.
    #[serde(default, deserialize_with = "lenient")]
    pub concentration_series: Option<ConcentrationSeries>,

    /// Demographic correlations.
    #[serde(default, deserialize_with = "lenient")]
    pub demographics: Option<Demographics>,

    /// Environment and lifestyle factors.
    #[serde(default, deserialize_with = "lenient")]
    pub environment: Option<Environment>,

    /// Related research, newest first.
    #[serde(default, deserialize_with = "lenient")]
    pub research: Option<Vec<ResearchItem>>,
}

impl DashboardPayload {
    /// Decodes a payload from a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<DashboardPayload> {
        serde_json::from_str(json)
    }
}

/// A flat mapping of metric names to scalar values.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SummaryMetrics(Map<String, Value>);

impl SummaryMetrics {
    /// Returns the raw value of a metric, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl FromIterator<(String, Value)> for SummaryMetrics {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Grouped maternal/fetal averages.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct PcbLevels {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub maternal: Vec<f64>,
    #[serde(default)]
    pub fetal: Vec<f64>,
}

/// Low/medium/high counts per label.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct RiskDistribution {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub risk_low: Vec<f64>,
    #[serde(default)]
    pub risk_med: Vec<f64>,
    #[serde(default)]
    pub risk_high: Vec<f64>,
}

/// Two aligned series over the same labels.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct ConcentrationSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub maternal_series: Vec<f64>,
    #[serde(default)]
    pub fetal_series: Vec<f64>,
}

/// A single labelled series.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct LabeledValues {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
}

/// A point of a scatter plot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A square correlation matrix with one label per row and column.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct CorrelationMatrix {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub matrix: Vec<Vec<f64>>,
}

/// The demographics section.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct Demographics {
    #[serde(default, deserialize_with = "lenient")]
    pub pcb_by_age: Option<LabeledValues>,
    #[serde(default, deserialize_with = "lenient")]
    pub scatter_total_vs_age: Option<Vec<Point>>,
    #[serde(default, deserialize_with = "lenient")]
    pub pcb_by_bmi: Option<LabeledValues>,
    #[serde(default, deserialize_with = "lenient")]
    pub smoking_comparison: Option<LabeledValues>,
    #[serde(default, deserialize_with = "lenient")]
    pub correlation_heatmap: Option<CorrelationMatrix>,
}

/// The environment and lifestyle section.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct Environment {
    #[serde(default, deserialize_with = "lenient")]
    pub exposure_contribution: Option<LabeledValues>,
    #[serde(default, deserialize_with = "lenient")]
    pub dietary_patterns: Option<LabeledValues>,
    #[serde(default, deserialize_with = "lenient")]
    pub lifestyle_clusters: Option<Vec<Point>>,
}

/// A related study, rendered as a link.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct ResearchItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

// Decodes a section through an intermediate `Value`, so a decoding failure
// only drops the section instead of failing the whole payload.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;

    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value(value) {
        Ok(section) => Ok(Some(section)),
        Err(error) => {
            tracing::warn!(
                section = std::any::type_name::<T>(),
                %error,
                "ignoring a malformed payload section"
            );
            Ok(None)
        }
    }
}
