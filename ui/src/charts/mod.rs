//! One component per chart archetype. Every chart follows the same contract:
//! a one-shot reveal gates the entrance animation, a single active index
//! (hover over keyboard focus) drives highlighting, tooltips, and the detail
//! panel, and the container carries a full-sentence accessible description.

pub mod butterfly;
pub mod donut;
pub mod grouped;
pub mod lollipop;
pub mod slope;
pub mod stacked;
pub mod treemap;

pub use butterfly::ButterflyChart;
pub use donut::DonutChart;
pub use grouped::GroupedBarChart;
pub use lollipop::LollipopChart;
pub use slope::SlopeChart;
pub use stacked::StackedBarChart;
pub use treemap::TreemapChart;

use leptos::*;
use report_core::ChartRecord;
use viz_engine::{format_value, signed_gap_pp, InteractionState, NavKey, Orientation};

/// Shared axis maxima so bar lengths stay comparable across charts of the
/// same unit, rather than each chart scaling to its own data max.
pub(crate) const PCT_AXIS_MAX: f64 = 100.0;
pub(crate) const USD_AXIS_MAX: f64 = 900.0;

/// Bar length (px) past which the in-bar value label moves inside the fill.
pub(crate) const LABEL_INSIDE_PX: f64 = 48.0;

pub(crate) const SERIES_COLORS: [&str; 3] = [
    "var(--series-a)",
    "var(--series-b)",
    "var(--series-c)",
];

pub(crate) fn series_color(k: usize) -> &'static str {
    SERIES_COLORS[k % SERIES_COLORS.len()]
}

/// Route a keydown to the interaction state; swallows handled keys so the
/// page does not scroll under arrow navigation.
pub(crate) fn handle_nav_key(
    ev: &web_sys::KeyboardEvent,
    state: RwSignal<InteractionState>,
    len: usize,
    orientation: Orientation,
) {
    if let Some(key) = NavKey::from_key(&ev.key(), orientation) {
        ev.prevent_default();
        state.update(|s| s.key(key, len));
    }
}

/// Tooltip body for one record: every metric with its exact value, plus the
/// gap between the first two metrics when the chart compares them.
pub(crate) fn tooltip_lines(rec: &ChartRecord, show_gap: bool) -> Vec<String> {
    let mut lines: Vec<String> = rec
        .metrics
        .iter()
        .map(|m| {
            if rec.metrics.len() == 1 {
                format_value(m.value, m.unit)
            } else {
                format!("{} {}", m.name, format_value(m.value, m.unit))
            }
        })
        .collect();
    if show_gap && rec.metrics.len() >= 2 {
        lines.push(format!(
            "Gap {}",
            signed_gap_pp(rec.metrics[0].value, rec.metrics[1].value)
        ));
    }
    lines
}

/// Detail panel under a chart: full label, raw values, optional delta, and
/// the record's descriptive text. Renders nothing without an active record.
#[component]
pub(crate) fn DetailPanel(
    records: StoredValue<Vec<ChartRecord>>,
    active: Signal<Option<usize>>,
    #[prop(default = false)] show_gap: bool,
) -> impl IntoView {
    view! {
        <div class="detail-panel" aria-live="polite">
            {move || {
                active
                    .get()
                    .and_then(|i| records.with_value(|recs| recs.get(i).cloned()))
                    .map(|rec| {
                        let values = tooltip_lines(&rec, show_gap);
                        view! {
                            <div class="detail-inner">
                                <span class="detail-category">{rec.category}</span>
                                {values
                                    .into_iter()
                                    .map(|v| view! { <span class="detail-value">{v}</span> })
                                    .collect_view()}
                                {rec.description.map(|d| {
                                    view! { <span class="detail-note">{d}</span> }
                                })}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Closing prose restating the most salient comparison in the chart.
#[component]
pub(crate) fn Insight(text: &'static str) -> impl IntoView {
    view! { <p class="callout">{text}</p> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_leadership_tooltip_carries_both_exact_values() {
        let records = report_core::ai_leadership();
        let dedicated = records
            .iter()
            .find(|r| r.category == "Dedicated Leader")
            .unwrap();
        let lines = tooltip_lines(dedicated, true);
        assert!(lines.iter().any(|l| l.contains("6%")));
        assert!(lines.iter().any(|l| l.contains("13%")));
    }

    #[test]
    fn quarterly_board_tooltip_shows_values_and_gap() {
        let records = report_core::board_reporting();
        let quarterly = records.iter().find(|r| r.category == "Quarterly").unwrap();
        let lines = tooltip_lines(quarterly, true);
        assert!(lines.iter().any(|l| l.contains("39%")));
        assert!(lines.iter().any(|l| l.contains("63%")));
        assert_eq!(lines.last().unwrap(), "Gap +24pp");
    }

    #[test]
    fn single_metric_tooltip_drops_the_series_name() {
        let records = report_core::threat_priorities();
        let lines = tooltip_lines(&records[0], false);
        assert_eq!(lines, vec!["43%".to_string()]);
    }
}
