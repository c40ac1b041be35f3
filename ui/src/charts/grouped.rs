use leptos::*;
use report_core::ChartRecord;
use viz_engine::{
    bar_label_anchor, chart_summary, format_value, scale_frac, stagger_delay_ms, transition_ms,
    InteractionState, LabelAnchor, Orientation,
};

use crate::charts::{handle_nav_key, series_color, tooltip_lines, DetailPanel, Insight};
use crate::reveal::{use_motion, use_reveal};

/// Nominal track width for the label anchor-flip decision.
const TRACK_PX: f64 = 360.0;

/// Horizontal bars, one track per metric (one for single-series charts, two
/// for the private/public pairs). Bars grow from zero on reveal with a
/// per-row stagger.
#[component]
pub fn GroupedBarChart(
    title: &'static str,
    summary_intro: &'static str,
    records: Vec<ChartRecord>,
    axis_max: f64,
    insight: &'static str,
    #[prop(default = 0.25)] threshold: f64,
    #[prop(default = false)] show_gap: bool,
) -> impl IntoView {
    let motion = use_motion();
    let n = records.len();
    let aria = chart_summary(summary_intro, &records);
    let rows = records.clone();
    let records = store_value(records);
    let state = create_rw_signal(InteractionState::default());
    let container = create_node_ref::<html::Div>();
    let revealed = use_reveal(container, threshold);
    let duration = transition_ms(700, motion);

    let legend = rows
        .first()
        .map(|rec| rec.metrics.iter().map(|m| m.name).collect::<Vec<_>>())
        .unwrap_or_default();

    view! {
        <figure class="chart-figure">
            <figcaption>{title}</figcaption>
            {(legend.len() > 1)
                .then(|| {
                    view! {
                        <div class="legend">
                            {legend
                                .iter()
                                .enumerate()
                                .map(|(k, name)| {
                                    view! {
                                        <span class="legend-item">
                                            <span
                                                class="legend-swatch"
                                                style=format!("background:{};", series_color(k))
                                            ></span>
                                            {*name}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            <div
                class="chart-body"
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
                        let delay = stagger_delay_ms(i, 70, motion);
                        let tip = tooltip_lines(&rec, show_gap).join(" \u{00b7} ");
                        let bars = rec
                            .metrics
                            .iter()
                            .enumerate()
                            .map(|(k, m)| {
                                let frac = scale_frac(m.value, axis_max);
                                let inside = matches!(
                                    bar_label_anchor(frac * TRACK_PX, crate::charts::LABEL_INSIDE_PX),
                                    LabelAnchor::InsideEnd
                                );
                                let color = series_color(k);
                                let value_label = format_value(m.value, m.unit);
                                let fill_style = move || {
                                    format!(
                                        "width:{:.2}%;background:{};transition:width {}ms ease-out {}ms;",
                                        if revealed.get() { frac * 100.0 } else { 0.0 },
                                        color,
                                        duration,
                                        delay,
                                    )
                                };
                                view! {
                                    <div class="bar-track">
                                        <div class="bar-fill" style=fill_style>
                                            {inside
                                                .then(|| {
                                                    view! {
                                                        <span class="bar-value inside">{value_label.clone()}</span>
                                                    }
                                                })}
                                        </div>
                                        {(!inside)
                                            .then(|| {
                                                view! {
                                                    <span
                                                        class="bar-value outside"
                                                        style=format!("left:calc({:.2}% + 6px);", frac * 100.0)
                                                    >
                                                        {value_label.clone()}
                                                    </span>
                                                }
                                            })}
                                    </div>
                                }
                            })
                            .collect_view();
                        view! {
                            <div
                                class="chart-row"
                                class:active=row_active
                                class:emphasis=rec.emphasis
                                aria-pressed=move || {
                                    if state.get().focused() == Some(i) { "true" } else { "false" }
                                }
                                aria-label=rec.category
                                on:mouseenter=move |_| state.update(|s| s.hover_enter(i))
                                on:click=move |_| state.update(|s| s.toggle(i))
                            >
                                <span class="row-label">{rec.category}</span>
                                <div class="row-tracks">{bars}</div>
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
                show_gap=show_gap
            />
            <Insight text=insight/>
        </figure>
    }
}
