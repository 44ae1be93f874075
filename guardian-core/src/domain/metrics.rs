// guardian-core/src/domain/metrics.rs
//
// Input shapes for one evaluation cycle. Everything here is read-only
// once built: the check engines never mutate a series.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One observation in a KPI series.
///
/// Untagged so that JSON/YAML inputs stay natural:
/// `[1000, 1050, null, "n/a"]` maps to Number/Number/Null/Text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Null,
}

impl MetricValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, MetricValue::Number(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, MetricValue::Null)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Text(s) => write!(f, "{}", s),
            MetricValue::Null => write!(f, "null"),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(n: f64) -> Self {
        MetricValue::Number(n)
    }
}

impl From<Option<f64>> for MetricValue {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(n) => MetricValue::Number(n),
            None => MetricValue::Null,
        }
    }
}

/// A named, time-ordered KPI series. Name is unique within a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub name: String,
    pub values: Vec<MetricValue>,
}

impl MetricSeries {
    pub fn new(name: impl Into<String>, values: Vec<MetricValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Builds a series from plain numbers where `None` marks an absent value.
    pub fn from_numbers(name: impl Into<String>, values: &[Option<f64>]) -> Self {
        Self {
            name: name.into(),
            values: values.iter().map(|v| MetricValue::from(*v)).collect(),
        }
    }

    /// The ordered numeric subset (nulls and text dropped).
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(MetricValue::as_number).collect()
    }

    /// Renders the raw series for detail strings, e.g. `[82, 80, 81, null]`.
    pub fn display_values(&self) -> String {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        format!("[{}]", parts.join(", "))
    }
}

/// Everything the pipeline needs for one dashboard.
///
/// Metrics are a `Vec` on purpose: issue ordering within each check
/// engine follows the metric insertion order, and the `Vec` makes that
/// invariant structural instead of relying on map iteration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardInput {
    pub dashboard: String,
    #[serde(default)]
    pub metrics: Vec<MetricSeries>,
    /// Inclusive (min, max) bounds, keyed by metric name.
    #[serde(default)]
    pub expected_ranges: HashMap<String, (f64, f64)>,
}

impl DashboardInput {
    pub fn new(dashboard: impl Into<String>) -> Self {
        Self {
            dashboard: dashboard.into(),
            metrics: Vec::new(),
            expected_ranges: HashMap::new(),
        }
    }

    pub fn with_metric(mut self, series: MetricSeries) -> Self {
        self.metrics.push(series);
        self
    }

    pub fn with_range(mut self, metric: impl Into<String>, min: f64, max: f64) -> Self {
        self.expected_ranges.insert(metric.into(), (min, max));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_subset_drops_null_and_text() {
        let series = MetricSeries::new(
            "Orders",
            vec![
                MetricValue::Number(82.0),
                MetricValue::Null,
                MetricValue::Text("n/a".to_string()),
                MetricValue::Number(81.0),
            ],
        );
        assert_eq!(series.numeric_values(), vec![82.0, 81.0]);
    }

    #[test]
    fn test_display_values_matches_report_format() {
        let series = MetricSeries::from_numbers("Orders", &[Some(82.0), Some(80.5), None]);
        assert_eq!(series.display_values(), "[82, 80.5, null]");
    }

    #[test]
    fn test_metric_value_deserializes_untagged() -> anyhow::Result<()> {
        let values: Vec<MetricValue> = serde_json::from_str(r#"[1000, null, "bad", 2.5]"#)?;
        assert_eq!(
            values,
            vec![
                MetricValue::Number(1000.0),
                MetricValue::Null,
                MetricValue::Text("bad".to_string()),
                MetricValue::Number(2.5),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_dashboard_input_deserializes_from_yaml() -> anyhow::Result<()> {
        let yaml = r#"
dashboard: Sales Overview
metrics:
  - name: Revenue
    values: [1000, 1050, 1020, 5200]
  - name: Orders
    values: [82, 80, 81, null]
expected_ranges:
  Revenue: [900, 2000]
"#;
        let input: DashboardInput = serde_yaml::from_str(yaml)?;
        assert_eq!(input.dashboard, "Sales Overview");
        assert_eq!(input.metrics.len(), 2);
        assert_eq!(input.metrics[0].name, "Revenue");
        assert_eq!(input.expected_ranges["Revenue"], (900.0, 2000.0));
        assert!(input.metrics[1].values[3].is_null());
        Ok(())
    }
}
