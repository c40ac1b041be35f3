use leptos::*;
use report_core::ChartRecord;
use viz_engine::{
    chart_summary, stagger_delay_ms, transition_ms, usd_label, InteractionState, Orientation,
};

use crate::charts::{handle_nav_key, series_color, tooltip_lines, DetailPanel, Insight};
use crate::reveal::{use_motion, use_reveal};

/// Stacked horizontal bars: raw currency components laid end to end, no
/// normalization, with the total printed after the strip. The whole strip
/// grows out from the left on reveal.
#[component]
pub fn StackedBarChart(
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
    let duration = transition_ms(750, motion);

    let legend = rows
        .first()
        .map(|rec| rec.metrics.iter().map(|m| m.name).collect::<Vec<_>>())
        .unwrap_or_default();

    view! {
        <figure class="chart-figure">
            <figcaption>{title}</figcaption>
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
                        let delay = stagger_delay_ms(i, 90, motion);
                        let total: f64 = rec.metrics.iter().map(|m| m.value).sum();
                        let total_label = usd_label(total);
                        let tip = format!(
                            "{} \u{00b7} Total {}",
                            tooltip_lines(&rec, false).join(" \u{00b7} "),
                            total_label,
                        );
                        let values: Vec<f64> = rec.metrics.iter().map(|m| m.value).collect();
                        let segments = viz_engine::stack(&values, axis_max, 100.0);
                        let strip_style = move || {
                            format!(
                                "transform:scaleX({});transition:transform {}ms ease-out {}ms;",
                                if revealed.get() { 1.0 } else { 0.0 },
                                duration,
                                delay,
                            )
                        };
                        let strip = segments
                            .iter()
                            .map(|seg| {
                                let style = format!(
                                    "left:{:.2}%;width:{:.2}%;background:{};",
                                    seg.offset_px,
                                    seg.length_px,
                                    series_color(seg.index),
                                );
                                view! { <div class="stack-segment" style=style></div> }
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
                                <div class="row-tracks">
                                    <div class="bar-track stack-track">
                                        <div class="stack-strip" style=strip_style>{strip}</div>
                                    </div>
                                    <span class="bar-value">{total_label.clone()}</span>
                                </div>
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
            />
            <Insight text=insight/>
        </figure>
    }
}
