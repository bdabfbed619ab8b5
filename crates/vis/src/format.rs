//! Display formatting of summary metrics.

use serde_json::Value;

/// The glyph shown in place of a missing or unusable value.
pub const PLACEHOLDER: &str = "-";

/// How a summary metric is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricFormat {
    /// A whole number, such as a patient count.
    Count,
    /// A floating-point number with exactly two fraction digits.
    Decimal,
    /// A label shown verbatim.
    Label,
}

impl MetricFormat {
    /// Formats a metric value, falling back to [PLACEHOLDER].
    pub fn format(&self, value: Option<&Value>) -> String {
        let formatted = match (self, value) {
            (MetricFormat::Count, Some(Value::Number(n))) => match n.as_i64() {
                Some(count) => Some(count.to_string()),
                // A fractional count is shown as served, never rounded.
                None => match n.as_f64() {
                    Some(v) if v.fract() == 0.0 => Some(format!("{v:.0}")),
                    _ => Some(n.to_string()),
                },
            },
            (MetricFormat::Decimal, Some(Value::Number(n))) => n.as_f64().map(decimal),
            (MetricFormat::Label, Some(Value::String(s))) if !s.is_empty() => Some(s.clone()),
            (MetricFormat::Label, Some(Value::Number(n))) => Some(n.to_string()),
            _ => None,
        };

        formatted.unwrap_or_else(|| String::from(PLACEHOLDER))
    }
}

/// Formats a number with exactly two fraction digits.
pub fn decimal(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        String::from(PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_decimals() {
        assert_eq!(MetricFormat::Decimal.format(Some(&json!(1.2))), "1.20");
        assert_eq!(MetricFormat::Decimal.format(Some(&json!(0.5678))), "0.57");
        assert_eq!(MetricFormat::Decimal.format(Some(&json!(3))), "3.00");
        assert_eq!(MetricFormat::Decimal.format(Some(&json!(-0.126))), "-0.13");
    }

    #[test]
    fn format_missing_values() {
        assert_eq!(MetricFormat::Decimal.format(None), "-");
        assert_eq!(MetricFormat::Decimal.format(Some(&Value::Null)), "-");
        assert_eq!(MetricFormat::Decimal.format(Some(&json!("high"))), "-");
        assert_eq!(MetricFormat::Count.format(Some(&json!([1, 2]))), "-");
        assert_eq!(MetricFormat::Label.format(Some(&json!(""))), "-");
        assert_eq!(MetricFormat::Label.format(None), "-");
    }

    #[test]
    fn format_counts_and_labels() {
        assert_eq!(MetricFormat::Count.format(Some(&json!(42))), "42");
        assert_eq!(MetricFormat::Count.format(Some(&json!(7.0))), "7");
        assert_eq!(MetricFormat::Count.format(Some(&json!(7.5))), "7.5");
        assert_eq!(MetricFormat::Count.format(Some(&json!(-2.25))), "-2.25");
        assert_eq!(MetricFormat::Label.format(Some(&json!("PCB_153"))), "PCB_153");
    }

    #[test]
    fn non_finite_decimal_is_placeholder() {
        assert_eq!(decimal(f64::NAN), "-");
        assert_eq!(decimal(f64::INFINITY), "-");
    }
}
