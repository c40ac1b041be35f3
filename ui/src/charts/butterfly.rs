use leptos::*;
use report_core::ChartRecord;
use viz_engine::{
    bar_label_anchor, chart_summary, format_value, scale_frac, stagger_delay_ms, transition_ms,
    InteractionState, LabelAnchor, Orientation,
};

use crate::charts::{handle_nav_key, series_color, tooltip_lines, DetailPanel, Insight};
use crate::reveal::{use_motion, use_reveal};

/// Half-track width in px; the anchor-flip rule is evaluated against it.
const TRACK_PX: f64 = 280.0;

/// Diverging paired bars from a shared center axis (first metric grows left,
/// second grows right). In-bar value labels flip to the outside, in the
/// series color, while the bar is too short to hold them legibly.
#[component]
pub fn ButterflyChart(
    title: &'static str,
    summary_intro: &'static str,
    records: Vec<ChartRecord>,
    axis_max: f64,
    insight: &'static str,
    #[prop(default = 0.2)] threshold: f64,
) -> impl IntoView {
    let motion = use_motion();
    let n = records.len();
    let aria = chart_summary(summary_intro, &records);
    let rows = records.clone();
    let records = store_value(records);
    let state = create_rw_signal(InteractionState::default());
    let container = create_node_ref::<html::Div>();
    let revealed = use_reveal(container, threshold);
    let duration = transition_ms(650, motion);

    let wing = move |rec: &ChartRecord, i: usize, k: usize, left: bool| {
        let (value, unit) = rec
            .metrics
            .get(k)
            .map(|m| (m.value, m.unit))
            .unwrap_or((0.0, report_core::Unit::Percent));
        let frac = scale_frac(value, axis_max);
        let inside = matches!(
            bar_label_anchor(frac * TRACK_PX, crate::charts::LABEL_INSIDE_PX),
            LabelAnchor::InsideEnd
        );
        let color = series_color(k);
        let delay = stagger_delay_ms(i, 60, motion);
        let label = format_value(value, unit);
        let fill_style = move || {
            format!(
                "width:{:.2}%;background:{};transition:width {}ms ease-out {}ms;",
                if revealed.get() { frac * 100.0 } else { 0.0 },
                color,
                duration,
                delay,
            )
        };
        let label_style = (!inside).then(|| {
            let side = if left { "right" } else { "left" };
            format!("color:{color};{side}:calc({:.2}% + 6px);", frac * 100.0)
        });
        view! {
            <div class="wing-track" class:wing-left=left>
                <div class="bar-fill" style=fill_style>
                    {inside.then(|| view! { <span class="bar-value inside">{label.clone()}</span> })}
                </div>
                {(!inside)
                    .then(|| view! { <span class="bar-value outside" style=label_style>{label.clone()}</span> })}
            </div>
        }
    };

    view! {
        <figure class="chart-figure">
            <figcaption>{title}</figcaption>
            <div class="legend">
                <span class="legend-item">
                    <span class="legend-swatch" style=format!("background:{};", series_color(0))></span>
                    "Private"
                </span>
                <span class="legend-item">
                    <span class="legend-swatch" style=format!("background:{};", series_color(1))></span>
                    "Public"
                </span>
            </div>
            <div
                class="chart-body butterfly"
                node_ref=container
                role="img"
                aria-label=aria
                tabindex=0
                on:keydown=move |ev| handle_nav_key(&ev, state, n, Orientation::Vertical)
                on:mouseleave=move |_| state.update(|s| s.hover_leave())
            >
                {rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, rec)| {
                        let row_active = move || state.get().active() == Some(i);
                        let tip = tooltip_lines(&rec, true).join(" \u{00b7} ");
                        let left = wing(&rec, i, 0, true);
                        let right = wing(&rec, i, 1, false);
                        view! {
                            <div
                                class="chart-row butterfly-row"
                                class:active=row_active
                                class:emphasis=rec.emphasis
                                aria-pressed=move || {
                                    if state.get().focused() == Some(i) { "true" } else { "false" }
                                }
                                aria-label=rec.category
                                on:mouseenter=move |_| state.update(|s| s.hover_enter(i))
                                on:click=move |_| state.update(|s| s.toggle(i))
                            >
                                {left}
                                <span class="row-label center-label">{rec.category}</span>
                                {right}
                                {move || {
                                    row_active()
                                        .then(|| {
                                            let tip = tip.clone();
                                            view! { <div class="tooltip" role="status">{tip}</div> }
                                        })
                                }}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <DetailPanel
                records=records
                active=Signal::derive(move || state.get().active())
                show_gap=true
            />
            <Insight text=insight/>
        </figure>
    }
}
