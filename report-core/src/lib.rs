use serde::{Deserialize, Serialize};

mod table;
mod projections;

pub use projections::{
    ai_leadership, board_reporting, compensation_mix, functional_responsibilities,
    governance_adoption, international_compensation, maturity_distribution, nextgen_priorities,
    reporting_lines, team_size_shift, threat_priorities,
};
pub use table::{metric, try_metric, MetricRow, SURVEY};

/// Unit attached to a survey metric. Percentages are 0-100, currency is
/// thousands of USD. Values in different units are never mixed in one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Percent,
    UsdThousands,
}

/// One named numeric value on a chart record, e.g. ("Public", 13.0, Percent).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricValue {
    pub name: &'static str,
    pub value: f64,
    pub unit: Unit,
}

impl MetricValue {
    pub fn pct(name: &'static str, value: f64) -> Self {
        Self {
            name,
            value,
            unit: Unit::Percent,
        }
    }

    pub fn usd(name: &'static str, value: f64) -> Self {
        Self {
            name,
            value,
            unit: Unit::UsdThousands,
        }
    }
}

/// One categorical row of a chart: label, one or more measured values,
/// optional tooltip text and an editorial emphasis flag.
///
/// Source order is render order. Metrics are independent survey results;
/// nothing constrains them to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRecord {
    pub category: &'static str,
    pub metrics: Vec<MetricValue>,
    pub description: Option<&'static str>,
    /// Manual editorial curation ("top concern", "warning row"); a
    /// presentation hint only, never derived from the values.
    pub emphasis: bool,
}

impl ChartRecord {
    pub fn new(category: &'static str, metrics: Vec<MetricValue>) -> Self {
        Self {
            category,
            metrics,
            description: None,
            emphasis: false,
        }
    }

    pub fn describe(mut self, text: &'static str) -> Self {
        self.description = Some(text);
        self
    }

    pub fn emphasize(mut self) -> Self {
        self.emphasis = true;
        self
    }

    /// First metric value, or 0.0 for an (authoring-error) empty record.
    pub fn primary(&self) -> f64 {
        self.metrics.first().map(|m| m.value).unwrap_or(0.0)
    }

    /// Value of the named metric, if the record carries it.
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.metrics.iter().find(|m| m.name == name).map(|m| m.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_every_field() {
        let rec = ChartRecord::new(
            "Third-party Risk",
            vec![MetricValue::pct("Share", 43.0)],
        )
        .describe("Vendor and supply-chain exposure")
        .emphasize();
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"category\":\"Third-party Risk\""));
        assert!(json.contains("\"value\":43.0"));
        assert!(json.contains("\"unit\":\"percent\""));
        assert!(json.contains("\"emphasis\":true"));
    }

    #[test]
    fn value_of_finds_named_metric() {
        let rec = ChartRecord::new(
            "Dedicated Leader",
            vec![
                MetricValue::pct("Private", 6.0),
                MetricValue::pct("Public", 13.0),
            ],
        );
        assert_eq!(rec.value_of("Public"), Some(13.0));
        assert_eq!(rec.value_of("Both"), None);
        assert_eq!(rec.primary(), 6.0);
    }
}
