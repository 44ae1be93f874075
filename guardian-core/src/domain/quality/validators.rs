// guardian-core/src/domain/quality/validators.rs

use crate::domain::issue::{Issue, IssueKind};
use crate::domain::metrics::{MetricSeries, MetricValue};
use std::collections::HashMap;

/// Minimum number of raw data points expected per metric.
const MIN_DATA_POINTS: usize = 3;

/// Value-level type and range validation.
///
/// Each violating value yields its own issue, in original series
/// order: three bad cells means three issues, never one batched entry.
/// Null markers are NOT exempt from range checks; they fail the
/// numeric-type comparison value by value (flagged for product review
/// in DESIGN.md).
pub struct RangeValidator;

impl RangeValidator {
    pub fn validate(
        metrics: &[MetricSeries],
        expected_ranges: &HashMap<String, (f64, f64)>,
    ) -> Vec<Issue> {
        let mut issues = Vec::new();

        for series in metrics {
            // Rule 1 — Non-numeric values
            issues.extend(Self::validate_numeric(series));

            // Rule 2 — Out-of-range values (only when a range is configured)
            if let Some(range) = expected_ranges.get(&series.name) {
                issues.extend(Self::validate_range(series, *range));
            }

            // Rule 3 — Minimum data length
            issues.extend(Self::validate_min_length(series));
        }

        issues
    }

    fn validate_numeric(series: &MetricSeries) -> Vec<Issue> {
        series
            .values
            .iter()
            .filter(|v| !v.is_numeric())
            .map(|v| {
                Issue::new(
                    &series.name,
                    IssueKind::NonNumeric,
                    format!("Value '{}' is not a number.", v),
                )
            })
            .collect()
    }

    fn validate_range(series: &MetricSeries, (min, max): (f64, f64)) -> Vec<Issue> {
        let mut issues = Vec::new();

        for value in &series.values {
            let Some(n) = value.as_number() else {
                issues.push(Issue::new(
                    &series.name,
                    IssueKind::OutOfRange,
                    format!(
                        "Invalid value '{}' cannot be compared to expected range {}-{}",
                        value, min, max
                    ),
                ));
                continue;
            };

            // Inclusive bounds on both sides
            if n < min || n > max {
                issues.push(Issue::new(
                    &series.name,
                    IssueKind::OutOfRange,
                    format!("Value {} outside expected range {}-{}", n, min, max),
                ));
            }
        }

        issues
    }

    fn validate_min_length(series: &MetricSeries) -> Vec<Issue> {
        if series.values.len() >= MIN_DATA_POINTS {
            return Vec::new();
        }
        vec![Issue::new(
            &series.name,
            IssueKind::InsufficientData,
            format!(
                "{} has only {} values (min required: {})",
                series.name,
                series.values.len(),
                MIN_DATA_POINTS
            ),
        )]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ranges(name: &str, min: f64, max: f64) -> HashMap<String, (f64, f64)> {
        HashMap::from([(name.to_string(), (min, max))])
    }

    #[test]
    fn test_null_fails_both_numeric_and_range_checks() {
        // A null under a configured range is counted twice: once by the
        // type check, once as not comparable to the range.
        let metrics = vec![MetricSeries::from_numbers(
            "Orders",
            &[Some(82.0), Some(80.0), Some(81.0), None],
        )];
        let issues = RangeValidator::validate(&metrics, &ranges("Orders", 50.0, 150.0));

        let non_numeric: Vec<_> = issues
            .iter()
            .filter(|i| i.kind == IssueKind::NonNumeric)
            .collect();
        let out_of_range: Vec<_> = issues
            .iter()
            .filter(|i| i.kind == IssueKind::OutOfRange)
            .collect();

        assert_eq!(non_numeric.len(), 1);
        assert_eq!(non_numeric[0].details, "Value 'null' is not a number.");
        assert_eq!(out_of_range.len(), 1);
        assert_eq!(
            out_of_range[0].details,
            "Invalid value 'null' cannot be compared to expected range 50-150"
        );
    }

    #[test]
    fn test_each_bad_value_yields_its_own_issue() {
        let metrics = vec![MetricSeries::new(
            "Labels",
            vec![
                MetricValue::Text("a".to_string()),
                MetricValue::Text("b".to_string()),
                MetricValue::Text("c".to_string()),
            ],
        )];
        let issues = RangeValidator::validate(&metrics, &HashMap::new());
        let non_numeric = issues
            .iter()
            .filter(|i| i.kind == IssueKind::NonNumeric)
            .count();
        assert_eq!(non_numeric, 3);
    }

    #[test]
    fn test_out_of_range_is_inclusive_on_bounds() {
        let metrics = vec![MetricSeries::from_numbers(
            "Margin",
            &[Some(10.0), Some(50.0), Some(50.1)],
        )];
        let issues = RangeValidator::validate(&metrics, &ranges("Margin", 10.0, 50.0));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::OutOfRange);
        assert_eq!(issues[0].details, "Value 50.1 outside expected range 10-50");
    }

    #[test]
    fn test_negative_value_out_of_range() {
        let metrics = vec![MetricSeries::from_numbers(
            "Conversions",
            &[Some(5.0), Some(7.0), Some(-2.0), Some(8.0)],
        )];
        let issues = RangeValidator::validate(&metrics, &ranges("Conversions", 0.0, 50.0));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].details, "Value -2 outside expected range 0-50");
    }

    #[test]
    fn test_short_series_flags_insufficient_data() {
        let metrics = vec![MetricSeries::from_numbers("Sparse", &[Some(1.0), None])];
        let issues = RangeValidator::validate(&metrics, &HashMap::new());
        assert!(issues.iter().any(|i| i.kind == IssueKind::InsufficientData));
        let insufficient = issues
            .iter()
            .find(|i| i.kind == IssueKind::InsufficientData)
            .unwrap();
        assert_eq!(insufficient.details, "Sparse has only 2 values (min required: 3)");
    }

    #[test]
    fn test_no_range_entry_means_no_range_issues() {
        let metrics = vec![MetricSeries::from_numbers(
            "Free",
            &[Some(1e9), Some(-1e9), Some(0.5)],
        )];
        let issues = RangeValidator::validate(&metrics, &HashMap::new());
        assert!(!issues.iter().any(|i| i.kind == IssueKind::OutOfRange));
    }
}
