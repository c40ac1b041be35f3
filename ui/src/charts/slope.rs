use leptos::*;
use report_core::ChartRecord;
use viz_engine::{
    chart_summary, format_value, path_length, points_attr, polyline_points, transition_ms,
    InteractionState, Orientation,
};

use crate::charts::{handle_nav_key, tooltip_lines, DetailPanel, Insight};
use crate::reveal::{use_motion, use_reveal};

const PLOT_W: f64 = 560.0;
const PLOT_H: f64 = 200.0;
const PAD_X: f64 = 40.0;
const PAD_TOP: f64 = 20.0;
const PAD_BOTTOM: f64 = 36.0;

/// Line over an ordered category axis with a stroke draw-in: the dash offset
/// runs from the full path length to zero once the chart reveals.
#[component]
pub fn SlopeChart(
    title: &'static str,
    summary_intro: &'static str,
    records: Vec<ChartRecord>,
    axis_max: f64,
    insight: &'static str,
    #[prop(default = 0.3)] threshold: f64,
) -> impl IntoView {
    let motion = use_motion();
    let n = records.len();
    let aria = chart_summary(summary_intro, &records);
    let values: Vec<f64> = records.iter().map(|r| r.primary()).collect();
    let points = polyline_points(&values, axis_max, PLOT_W, PLOT_H);
    let length = path_length(&points);
    let attr = points_attr(
        &points
            .iter()
            .map(|(x, y)| (x + PAD_X, y + PAD_TOP))
            .collect::<Vec<_>>(),
    );
    let area_attr = format!(
        "{} {:.2},{:.2} {:.2},{:.2}",
        attr,
        PAD_X + PLOT_W,
        PAD_TOP + PLOT_H,
        PAD_X,
        PAD_TOP + PLOT_H,
    );
    let rows = records.clone();
    let records = store_value(records);
    let state = create_rw_signal(InteractionState::default());
    let container = create_node_ref::<html::Div>();
    let revealed = use_reveal(container, threshold);
    let duration = transition_ms(900, motion);

    let line_style = move || {
        format!(
            "stroke-dasharray:{length:.2};stroke-dashoffset:{:.2};transition:stroke-dashoffset {}ms ease-out;",
            if revealed.get() { 0.0 } else { length },
            duration,
        )
    };
    let area_style = move || {
        format!(
            "opacity:{};transition:opacity {}ms ease-in {}ms;",
            if revealed.get() { 1.0 } else { 0.0 },
            duration / 2,
            duration / 2,
        )
    };

    view! {
        <figure class="chart-figure">
            <figcaption>{title}</figcaption>
            <div
                class="chart-body slope"
                node_ref=container
                role="img"
                aria-label=aria
                tabindex=0
                on:keydown=move |ev| handle_nav_key(&ev, state, n, Orientation::Vertical)
                on:mouseleave=move |_| state.update(|s| s.hover_leave())
            >
                <svg
                    viewBox=format!("0 0 {} {}", PLOT_W + 2.0 * PAD_X, PLOT_H + PAD_TOP + PAD_BOTTOM)
                    preserveAspectRatio="xMidYMid meet"
                >
                    <polygon points=area_attr.clone() class="slope-area" style=area_style></polygon>
                    <polyline points=attr.clone() class="slope-line" style=line_style></polyline>
                    {rows
                        .iter()
                        .zip(points.iter().copied())
                        .enumerate()
                        .map(|(i, (rec, (px, py)))| {
                            let cx = px + PAD_X;
                            let cy = py + PAD_TOP;
                            let point_active = move || state.get().active() == Some(i);
                            let value_label = rec
                                .metrics
                                .first()
                                .map(|m| format_value(m.value, m.unit))
                                .unwrap_or_default();
                            view! {
                                <g
                                    class="slope-point"
                                    class:active=point_active
                                    class:emphasis=rec.emphasis
                                    aria-pressed=move || {
                                        if state.get().focused() == Some(i) { "true" } else { "false" }
                                    }
                                    on:mouseenter=move |_| state.update(|s| s.hover_enter(i))
                                    on:click=move |_| state.update(|s| s.toggle(i))
                                >
                                    <circle
                                        cx=cx
                                        cy=cy
                                        r=move || if point_active() { 7.0 } else { 5.0 }
                                    ></circle>
                                    <text x=cx y={cy - 12.0} class="point-value" text-anchor="middle">
                                        {value_label}
                                    </text>
                                    <text
                                        x=cx
                                        y={PAD_TOP + PLOT_H + 24.0}
                                        class="axis-label"
                                        text-anchor="middle"
                                    >
                                        {rec.category}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()}
                </svg>
                {move || {
                    state
                        .get()
                        .active()
                        .and_then(|i| records.with_value(|recs| recs.get(i).cloned()))
                        .map(|rec| {
                            let tip = format!(
                                "{}: {}",
                                rec.category,
                                tooltip_lines(&rec, false).join(" \u{00b7} "),
                            );
                            view! { <div class="tooltip overlay-tip" role="status">{tip}</div> }
                        })
                }}
            </div>
            <DetailPanel
                records=records
                active=Signal::derive(move || state.get().active())
            />
            <Insight text=insight/>
        </figure>
    }
}
