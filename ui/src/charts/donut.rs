use leptos::*;
use report_core::ChartRecord;
use viz_engine::{
    annular_path, chart_summary, format_value, ring_segments, segment_radius, stagger_delay_ms,
    transition_ms, InteractionState, Orientation,
};

use crate::charts::{handle_nav_key, tooltip_lines, DetailPanel, Insight};
use crate::reveal::{use_motion, use_reveal};

const VIEW: f64 = 360.0;
const R_OUTER: f64 = 150.0;
const R_INNER: f64 = 95.0;
const BUMP: f64 = 9.0;

const SEGMENT_COLORS: [&str; 5] = ["#b6c4cf", "#7fa8c9", "#5b8bb2", "#ea7317", "#c2410c"];

/// Fixed-radius ring with arcs proportional to value. Selecting a segment
/// enlarges its arc slightly and recolors the center label to match it.
/// Left/Right arrows walk the ring.
#[component]
pub fn DonutChart(
    title: &'static str,
    summary_intro: &'static str,
    records: Vec<ChartRecord>,
    center_label: &'static str,
    insight: &'static str,
    #[prop(default = 0.3)] threshold: f64,
) -> impl IntoView {
    let motion = use_motion();
    let n = records.len();
    let aria = chart_summary(summary_intro, &records);
    let segments = ring_segments(&records.iter().map(|r| r.primary()).collect::<Vec<_>>());
    let rows = records.clone();
    let records = store_value(records);
    let state = create_rw_signal(InteractionState::default());
    let container = create_node_ref::<html::Div>();
    let revealed = use_reveal(container, threshold);
    let duration = transition_ms(500, motion);
    let c = VIEW / 2.0;

    view! {
        <figure class="chart-figure">
            <figcaption>{title}</figcaption>
            <div
                class="chart-body donut"
                node_ref=container
                role="img"
                aria-label=aria
                tabindex=0
                on:keydown=move |ev| handle_nav_key(&ev, state, n, Orientation::Horizontal)
                on:mouseleave=move |_| state.update(|s| s.hover_leave())
            >
                <svg viewBox=format!("0 0 {VIEW} {VIEW}") preserveAspectRatio="xMidYMid meet">
                    {rows
                        .iter()
                        .zip(segments.iter().copied())
                        .enumerate()
                        .map(|(i, (rec, seg))| {
                            let seg_active = move || state.get().active() == Some(i);
                            let delay = stagger_delay_ms(i, 80, motion);
                            let path = move || {
                                annular_path(
                                    c,
                                    c,
                                    segment_radius(R_OUTER, seg_active(), BUMP),
                                    R_INNER,
                                    &seg,
                                )
                            };
                            let style = move || {
                                format!(
                                    "opacity:{};transition:opacity {}ms ease-out {}ms;",
                                    if revealed.get() { 1.0 } else { 0.0 },
                                    duration,
                                    delay,
                                )
                            };
                            view! {
                                <path
                                    d=path
                                    style=style
                                    class="donut-segment"
                                    class:active=seg_active
                                    class:emphasis=rec.emphasis
                                    fill={SEGMENT_COLORS[i % SEGMENT_COLORS.len()]}
                                    aria-pressed=move || {
                                        if state.get().focused() == Some(i) { "true" } else { "false" }
                                    }
                                    on:mouseenter=move |_| state.update(|s| s.hover_enter(i))
                                    on:click=move |_| state.update(|s| s.toggle(i))
                                ></path>
                            }
                        })
                        .collect_view()}
                    <text
                        x=c
                        y={c - 6.0}
                        class="donut-center-name"
                        text-anchor="middle"
                        fill=move || {
                            state
                                .get()
                                .active()
                                .map(|i| SEGMENT_COLORS[i % SEGMENT_COLORS.len()])
                                .unwrap_or("var(--text)")
                        }
                    >
                        {move || {
                            state
                                .get()
                                .active()
                                .and_then(|i| records.with_value(|r| r.get(i).map(|rec| rec.category)))
                                .unwrap_or(center_label)
                        }}
                    </text>
                    <text x=c y={c + 22.0} class="donut-center-value" text-anchor="middle">
                        {move || {
                            state
                                .get()
                                .active()
                                .and_then(|i| {
                                    records.with_value(|r| {
                                        r.get(i).and_then(|rec| {
                                            rec.metrics
                                                .first()
                                                .map(|m| format_value(m.value, m.unit))
                                        })
                                    })
                                })
                                .unwrap_or_default()
                        }}
                    </text>
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
