use leptos::*;
use report_core::ChartRecord;
use viz_engine::{
    chart_summary, format_value, label_mode, squarify, stagger_delay_ms, transition_ms,
    wrap_label, InteractionState, LabelMode, Orientation, Rect,
};

use crate::charts::{handle_nav_key, tooltip_lines, DetailPanel, Insight};
use crate::reveal::{use_motion, use_reveal};

const VIEW_W: f64 = 720.0;
const VIEW_H: f64 = 420.0;
/// Rough character width at the tile font size, for wrap estimation.
const CHAR_PX: f64 = 7.5;

const TILE_COLORS: [&str; 6] = [
    "#c2410c", "#ea7317", "#f2a65a", "#5b8bb2", "#7fa8c9", "#b6c4cf",
];

/// Proportional-area treemap. Tile areas follow the squarified layout;
/// labels degrade from full wrapped text to value-only to nothing as tiles
/// shrink, and sub-pixel tiles are skipped entirely.
#[component]
pub fn TreemapChart(
    title: &'static str,
    summary_intro: &'static str,
    records: Vec<ChartRecord>,
    insight: &'static str,
    #[prop(default = 0.15)] threshold: f64,
) -> impl IntoView {
    let motion = use_motion();
    let n = records.len();
    let aria = chart_summary(summary_intro, &records);
    let tiles = squarify(
        &records.iter().map(|r| r.primary()).collect::<Vec<_>>(),
        Rect::new(0.0, 0.0, VIEW_W, VIEW_H),
    );
    let rows = records.clone();
    let records = store_value(records);
    let state = create_rw_signal(InteractionState::default());
    let container = create_node_ref::<html::Div>();
    let revealed = use_reveal(container, threshold);
    let duration = transition_ms(550, motion);

    view! {
        <figure class="chart-figure">
            <figcaption>{title}</figcaption>
            <div
                class="chart-body treemap"
                node_ref=container
                role="img"
                aria-label=aria
                tabindex=0
                on:keydown=move |ev| handle_nav_key(&ev, state, n, Orientation::Vertical)
                on:mouseleave=move |_| state.update(|s| s.hover_leave())
            >
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
                <svg viewBox=format!("0 0 {VIEW_W} {VIEW_H}") preserveAspectRatio="xMidYMid meet">
                    {rows
                        .iter()
                        .zip(tiles.iter())
                        .enumerate()
                        .map(|(i, (rec, tile))| {
                            let r = tile.rect;
                            // Sub-pixel tiles render nothing at all.
                            if r.w < 1.0 || r.h < 1.0 {
                                return None;
                            }
                            let tile_active = move || state.get().active() == Some(i);
                            let delay = stagger_delay_ms(i, 60, motion);
                            let value_label = rec
                                .metrics
                                .first()
                                .map(|m| format_value(m.value, m.unit))
                                .unwrap_or_default();
                            let mode = label_mode(r.w, r.h);
                            let max_chars = ((r.w - 12.0) / CHAR_PX).max(1.0) as usize;
                            let lines = match mode {
                                LabelMode::Full => wrap_label(rec.category, max_chars),
                                _ => Vec::new(),
                            };
                            let cx = r.x + r.w / 2.0;
                            let text = match mode {
                                LabelMode::Hidden => None,
                                LabelMode::ValueOnly => Some(view! {
                                    <text
                                        x=cx
                                        y={r.y + r.h / 2.0 + 5.0}
                                        class="tile-value"
                                        text-anchor="middle"
                                    >
                                        {value_label.clone()}
                                    </text>
                                }.into_view()),
                                LabelMode::Full => {
                                    let mut y = r.y + 24.0;
                                    let mut parts: Vec<View> = Vec::new();
                                    for line in &lines {
                                        parts.push(
                                            view! {
                                                <text x={r.x + 10.0} y=y class="tile-label">
                                                    {line.clone()}
                                                </text>
                                            }
                                            .into_view(),
                                        );
                                        y += 16.0;
                                    }
                                    parts.push(
                                        view! {
                                            <text x={r.x + 10.0} y={y + 4.0} class="tile-value">
                                                {value_label.clone()}
                                            </text>
                                        }
                                        .into_view(),
                                    );
                                    Some(parts.into_iter().collect_view())
                                }
                            };
                            let group_style = move || {
                                format!(
                                    "opacity:{};transition:opacity {}ms ease-out {}ms;",
                                    if revealed.get() { 1.0 } else { 0.0 },
                                    duration,
                                    delay,
                                )
                            };
                            Some(view! {
                                <g
                                    style=group_style
                                    class="treemap-tile"
                                    class:active=tile_active
                                    class:emphasis=rec.emphasis
                                    aria-pressed=move || {
                                        if state.get().focused() == Some(i) { "true" } else { "false" }
                                    }
                                    on:mouseenter=move |_| state.update(|s| s.hover_enter(i))
                                    on:click=move |_| state.update(|s| s.toggle(i))
                                >
                                    <rect
                                        x=r.x
                                        y=r.y
                                        width=r.w
                                        height=r.h
                                        fill={TILE_COLORS[i % TILE_COLORS.len()]}
                                    ></rect>
                                    {text}
                                </g>
                            })
                        })
                        .collect_view()}
                </svg>
            </div>
            <DetailPanel
                records=records
                active=Signal::derive(move || state.get().active())
            />
            <Insight text=insight/>
        </figure>
    }
}
