//! The time range selector.
//!
//! A [Range] is sent to the backend as the `range` query parameter and is
//! previewed on the page as a human-readable date span. The static dashboard
//! variant offers a [Selection::Custom] entry instead, which swaps the preview
//! for a pair of date inputs.

use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;

use chrono::Days;
use chrono::NaiveDate;
use chrono::Utc;

use crate::id::ElementId;
use crate::view::DateInput;
use crate::view::ViewPort;

/// The text element showing the range preview.
pub const RANGE_PREVIEW: ElementId = ElementId::new("rangePreview");

/// The container receiving the custom range inputs.
pub const CUSTOM_RANGE: ElementId = ElementId::new("customRange");

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A preset time window accepted by the dashboard endpoint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Range {
    /// Every record.
    #[default]
    All,
    /// The last 7 days.
    Week,
    /// The last 30 days.
    Month,
    /// The last 90 days.
    ThreeMonths,
}

impl Range {
    /// All preset ranges, in selector order.
    pub const ALL: [Range; 4] = [Range::All, Range::Week, Range::Month, Range::ThreeMonths];

    /// The value sent as the `range` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Range::All => "all",
            Range::Week => "week",
            Range::Month => "month",
            Range::ThreeMonths => "threemonths",
        }
    }

    /// The number of days the window reaches back from today.
    pub fn days(&self) -> u64 {
        match self {
            Range::All => 0,
            Range::Week => 7,
            Range::Month => 30,
            Range::ThreeMonths => 90,
        }
    }

    /// The first day of the window, or `None` for [Range::All].
    pub fn start(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Range::All => None,
            range => today.checked_sub_days(Days::new(range.days())),
        }
    }

    /// Describes the window ending at `today`.
    pub fn describe(&self, today: NaiveDate) -> String {
        match self.start(today) {
            Some(start) => format!(
                "Showing: {start} → {end}",
                start = start.format(DATE_FORMAT),
                end = today.format(DATE_FORMAT)
            ),
            None => String::from("Showing: All time"),
        }
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Range {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Range::All),
            "week" => Ok(Range::Week),
            "month" => Ok(Range::Month),
            "threemonths" => Ok(Range::ThreeMonths),
            other => Err(ParseRangeError(other.to_owned())),
        }
    }
}

/// An entry of the static dashboard's range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// One of the preset windows.
    Preset(Range),
    /// A user-picked start and end date.
    Custom,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Preset(Range::All)
    }
}

impl FromStr for Selection {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "custom" => Ok(Selection::Custom),
            other => other.parse().map(Selection::Preset),
        }
    }
}

/// The error returned when parsing an unknown range value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRangeError(String);

impl Display for ParseRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown range `{}`; expected one of: all, week, month, threemonths",
            self.0
        )
    }
}

impl Error for ParseRangeError {}

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Writes the range preview of the fetch-driven dashboard.
pub fn show_preview<V: ViewPort>(view: &mut V, range: Range, today: NaiveDate) {
    view.set_text(&RANGE_PREVIEW, &range.describe(today));
}

/// Updates the custom range container of the static dashboard.
///
/// Selecting [Selection::Custom] injects a start and an end date input;
/// any other selection clears the container.
pub fn show_custom_inputs<V: ViewPort>(view: &mut V, selection: Selection) {
    let inputs = match selection {
        Selection::Custom => vec![
            DateInput::new("start", "Start date"),
            DateInput::new("end", "End date"),
        ],
        Selection::Preset(_) => Vec::new(),
    };

    view.set_date_inputs(&CUSTOM_RANGE, &inputs);
}
