//! Cartesian axes of a chart configuration.

use serde::Serialize;

/// The `x` and `y` axes of a cartesian chart.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Scales {
    x: Axis,
    y: Axis,
}

impl Scales {
    /// Creates the scales from both axes.
    pub fn new(x: Axis, y: Axis) -> Scales {
        Self { x, y }
    }

    #[allow(missing_docs)]
    pub fn x(&self) -> &Axis {
        &self.x
    }

    #[allow(missing_docs)]
    pub fn y(&self) -> &Axis {
        &self.y
    }
}

/// A single axis.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    stacked: Option<bool>,
    #[serde(rename = "beginAtZero", skip_serializing_if = "Option::is_none")]
    begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ticks: Option<Ticks>,
}

impl Axis {
    /// Creates an axis with the backend defaults.
    pub fn new() -> Axis {
        Self::default()
    }

    /// Stacks the datasets along this axis.
    pub fn stacked(mut self) -> Axis {
        self.stacked = Some(true);
        self
    }

    /// Starts a value axis at zero.
    pub fn from_zero(mut self) -> Axis {
        self.begin_at_zero = Some(true);
        self
    }

    /// Bounds the axis to `[min, max]`.
    pub fn bounds(mut self, min: f64, max: f64) -> Axis {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Sets the axis title.
    pub fn title(mut self, text: &str) -> Axis {
        self.title = Some(AxisTitle {
            display: true,
            text: text.to_owned(),
        });
        self
    }

    /// Places a tick at every integer position and names it after
    /// the label at the same 1-based position.
    pub fn label_ticks(mut self, labels: &[String]) -> Axis {
        self.ticks = Some(Ticks {
            step_size: 1.0,
            label_lookup: labels.to_vec(),
        });
        self
    }

    #[allow(missing_docs)]
    pub fn is_stacked(&self) -> bool {
        self.stacked.unwrap_or(false)
    }

    /// The `(min, max)` bounds, if set.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.min.zip(self.max)
    }

    /// The label of the tick at `position`, if the axis names its ticks.
    pub fn tick_label(&self, position: f64) -> Option<&str> {
        self.ticks
            .as_ref()
            .and_then(|ticks| tick_label(&ticks.label_lookup, position))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct AxisTitle {
    display: bool,
    text: String,
}

// `labelLookup` is not a Chart.js option. The page bootstrap script turns it
// into a tick callback that performs the same lookup as `tick_label`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Ticks {
    step_size: f64,
    label_lookup: Vec<String>,
}

/// Maps a tick position to its label by rounding the position to
/// the nearest integer and reading the label at that 1-based index.
pub fn tick_label(labels: &[String], position: f64) -> Option<&str> {
    let index = position.round();

    if !index.is_finite() || index < 1.0 {
        return None;
    }

    labels.get(index as usize - 1).map(String::as_str)
}
