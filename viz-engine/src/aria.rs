//! Accessible full-sentence chart descriptions. Every chart is `role="img"`
//! with a label enumerating all of its data points, so a screen reader gets
//! the whole dataset without the graphics.

use crate::format::format_value;
use report_core::ChartRecord;

/// "Treemap of top threat priorities. Third-party Risk: 43%. AI-enhanced
/// Attacks: 22%. ..." — one clause per record, values in record order, each
/// metric named when a record carries more than one.
pub fn chart_summary(intro: &str, records: &[ChartRecord]) -> String {
    let mut out = String::with_capacity(64 + records.len() * 32);
    out.push_str(intro);
    if !intro.ends_with('.') {
        out.push('.');
    }
    for rec in records {
        out.push(' ');
        out.push_str(rec.category);
        out.push_str(": ");
        if rec.metrics.len() == 1 {
            out.push_str(&format_value(rec.metrics[0].value, rec.metrics[0].unit));
        } else {
            let parts: Vec<String> = rec
                .metrics
                .iter()
                .map(|m| format!("{} {}", m.name, format_value(m.value, m.unit)))
                .collect();
            out.push_str(&parts.join(", "));
        }
        out.push('.');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_core::threat_priorities;

    #[test]
    fn summary_lists_every_value_in_order() {
        let text = chart_summary("Treemap of top threat priorities", &threat_priorities());
        for needle in ["43%", "22%", "15%", "10%", "7%", "3%"] {
            assert!(text.contains(needle), "missing {needle} in {text}");
        }
        // Values appear in record order ("3%" alone would also match inside
        // "43%", so anchor on the clause form).
        let positions: Vec<usize> = [": 43%.", ": 22%.", ": 15%.", ": 10%.", ": 7%.", ": 3%."]
            .iter()
            .map(|n| text.find(n).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(text.starts_with("Treemap of top threat priorities."));
    }

    #[test]
    fn paired_records_name_each_metric() {
        let text = chart_summary(
            "Who owns AI security",
            &report_core::ai_leadership(),
        );
        assert!(text.contains("Dedicated Leader: Private 6%, Public 13%"));
    }
}
