use leptos::*;
use report_core::ChartRecord;
use viz_engine::{
    chart_summary, scale_frac, stagger_delay_ms, transition_ms, InteractionState, Orientation,
};

use crate::charts::{handle_nav_key, series_color, tooltip_lines, DetailPanel, Insight};
use crate::reveal::{use_motion, use_reveal};

/// Dumbbell rows: one dot per metric on a shared track, joined by a
/// connector whose span is the gap between them. Clicking a row pins it.
#[component]
pub fn LollipopChart(
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
    let duration = transition_ms(600, motion);

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
                                    class="legend-swatch dot"
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
                        let delay = stagger_delay_ms(i, 80, motion);
                        let tip = format!(
                            "{}: {}",
                            rec.category,
                            tooltip_lines(&rec, true).join(" \u{00b7} "),
                        );
                        let fracs: Vec<f64> = rec
                            .metrics
                            .iter()
                            .map(|m| scale_frac(m.value, axis_max))
                            .collect();
                        let lo = fracs.iter().copied().fold(f64::INFINITY, f64::min);
                        let hi = fracs.iter().copied().fold(0.0, f64::max);
                        let connector_style = move || {
                            format!(
                                "left:{:.2}%;width:{:.2}%;transition:width {}ms ease-out {}ms, opacity {}ms;opacity:{};",
                                lo * 100.0,
                                if revealed.get() { (hi - lo) * 100.0 } else { 0.0 },
                                duration,
                                delay,
                                duration,
                                if revealed.get() { 1.0 } else { 0.0 },
                            )
                        };
                        let dots = fracs
                            .iter()
                            .enumerate()
                            .map(|(k, &frac)| {
                                let color = series_color(k);
                                let dot_style = move || {
                                    format!(
                                        "left:{:.2}%;background:{};opacity:{};transition:opacity {}ms ease-out {}ms;",
                                        frac * 100.0,
                                        color,
                                        if revealed.get() { 1.0 } else { 0.0 },
                                        duration,
                                        delay,
                                    )
                                };
                                view! { <span class="lolli-dot" style=dot_style></span> }
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
                                    <div class="bar-track lolli-track">
                                        <div class="lolli-connector" style=connector_style></div>
                                        {dots}
                                    </div>
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
                show_gap=true
            />
            <Insight text=insight/>
        </figure>
    }
}
