//! Global stylesheet, injected once from the `App` shell.

pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #0e1116;
  --panel: #161b23;
  --panel-edge: #232b37;
  --text: #e8ecf2;
  --text-dim: #96a0ae;
  --accent: #e4b34a;
  --series-a: #4f8fde;
  --series-b: #d96a4f;
  --series-c: #6fbf8f;
  --track: #1d242f;
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: Georgia, 'Times New Roman', serif;
  line-height: 1.6;
}

.topnav {
  position: sticky;
  top: 0;
  z-index: 20;
  display: flex;
  align-items: center;
  gap: 1.5rem;
  padding: 0.6rem 1.25rem;
  background: rgba(14, 17, 22, 0.92);
  border-bottom: 1px solid var(--panel-edge);
  backdrop-filter: blur(6px);
  font-family: 'Helvetica Neue', Arial, sans-serif;
}

.brand {
  font-weight: 700;
  letter-spacing: 0.06em;
  color: var(--accent);
  white-space: nowrap;
}

.nav-links {
  display: flex;
  gap: 0.25rem;
  overflow-x: auto;
  scrollbar-width: none;
}

.nav-link {
  padding: 0.3rem 0.6rem;
  border-radius: 4px;
  color: var(--text-dim);
  text-decoration: none;
  font-size: 0.82rem;
  white-space: nowrap;
}

.nav-link:hover { color: var(--text); }

.nav-link.active {
  color: var(--bg);
  background: var(--accent);
}

.hero {
  max-width: 52rem;
  margin: 0 auto;
  padding: 5rem 1.5rem 3rem;
  text-align: center;
}

.kicker {
  font-family: 'Helvetica Neue', Arial, sans-serif;
  font-size: 0.8rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--accent);
}

.hero h1 {
  font-size: clamp(2rem, 5vw, 3.2rem);
  margin: 0.5rem 0 1rem;
  line-height: 1.15;
}

.lede {
  font-size: 1.15rem;
  color: var(--text-dim);
  max-width: 38rem;
  margin: 0 auto;
}

.report {
  max-width: 52rem;
  margin: 0 auto;
  padding: 0 1.5rem 6rem;
}

.report-section {
  padding-top: 4rem;
}

.report-section h2 {
  font-size: 1.7rem;
  border-bottom: 2px solid var(--accent);
  display: inline-block;
  padding-bottom: 0.2rem;
  margin-bottom: 1rem;
}

.stat-row {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
  gap: 1rem;
  margin: 1.5rem 0;
}

.stat {
  background: var(--panel);
  border: 1px solid var(--panel-edge);
  border-radius: 8px;
  padding: 1rem;
  text-align: center;
}

.stat-value {
  display: block;
  font-size: 1.9rem;
  font-weight: 700;
  color: var(--accent);
  font-family: 'Helvetica Neue', Arial, sans-serif;
}

.stat-label {
  display: block;
  font-size: 0.8rem;
  color: var(--text-dim);
  margin-top: 0.25rem;
}

/* ---- chart chrome ---- */

.chart-figure {
  margin: 2rem 0;
  padding: 1.25rem;
  background: var(--panel);
  border: 1px solid var(--panel-edge);
  border-radius: 8px;
  font-family: 'Helvetica Neue', Arial, sans-serif;
}

.chart-figure figcaption {
  font-size: 1rem;
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.chart-body {
  position: relative;
  outline: none;
}

.chart-body:focus-visible {
  box-shadow: 0 0 0 2px var(--accent);
  border-radius: 4px;
}

.legend {
  display: flex;
  gap: 1rem;
  margin-bottom: 0.75rem;
  font-size: 0.78rem;
  color: var(--text-dim);
}

.legend-item {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
}

.legend-swatch {
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 2px;
  display: inline-block;
}

.legend-swatch.dot { border-radius: 50%; }

.chart-row {
  display: grid;
  grid-template-columns: 11rem 1fr;
  align-items: center;
  gap: 0.75rem;
  padding: 0.3rem 0.4rem;
  border-radius: 4px;
  cursor: pointer;
}

.chart-row.active { background: rgba(228, 179, 74, 0.08); }

.chart-row.emphasis .row-label { color: var(--accent); }

.row-label {
  font-size: 0.82rem;
  text-align: right;
  color: var(--text-dim);
}

.chart-row.active .row-label { color: var(--text); }

.row-tracks {
  display: flex;
  flex-direction: column;
  gap: 3px;
}

.bar-track {
  position: relative;
  height: 16px;
  background: var(--track);
  border-radius: 3px;
  overflow: visible;
}

.bar-fill {
  position: absolute;
  top: 0;
  left: 0;
  height: 100%;
  border-radius: 3px;
}

.bar-value {
  font-size: 0.72rem;
  font-variant-numeric: tabular-nums;
  line-height: 16px;
  white-space: nowrap;
}

.bar-value.inside {
  position: absolute;
  right: 4px;
  top: 0;
  color: var(--bg);
  font-weight: 600;
}

.bar-value.outside {
  position: absolute;
  top: 0;
  color: var(--text-dim);
}

/* butterfly */

.chart-body.butterfly .chart-row {
  grid-template-columns: 1fr 9rem 1fr;
}

.row-label.center-label { text-align: center; }

.wing-track {
  position: relative;
  height: 16px;
  background: var(--track);
  border-radius: 3px;
}

.wing-track.wing-left .bar-fill {
  left: auto;
  right: 0;
}

.wing-track.wing-left .bar-value.inside {
  right: auto;
  left: 4px;
}

/* stacked */

.stack-track { height: 22px; overflow: visible; }

.stack-strip {
  position: absolute;
  inset: 0;
  transform-origin: left center;
}

.stack-segment {
  position: absolute;
  top: 0;
  height: 100%;
}

.stack-segment:first-child { border-radius: 3px 0 0 3px; }

/* lollipop */

.lolli-track { background: none; }

.lolli-track::before {
  content: "";
  position: absolute;
  left: 0;
  right: 0;
  top: 7px;
  height: 2px;
  background: var(--track);
}

.lolli-connector {
  position: absolute;
  top: 6px;
  height: 4px;
  border-radius: 2px;
  background: var(--text-dim);
  opacity: 0.5;
}

.lolli-dot {
  position: absolute;
  top: 2px;
  width: 12px;
  height: 12px;
  margin-left: -6px;
  border-radius: 50%;
  border: 2px solid var(--bg);
}

/* treemap + donut + slope */

.chart-body.treemap svg,
.chart-body.donut svg,
.chart-body.slope svg {
  width: 100%;
  height: auto;
  display: block;
}

.treemap-tile rect { stroke: var(--bg); stroke-width: 2px; }

.tile-label {
  font-size: 13px;
  fill: #0e1116;
  font-weight: 600;
}

.tile-value {
  font-size: 13px;
  fill: rgba(14, 17, 22, 0.75);
  font-variant-numeric: tabular-nums;
}

.donut-segment { stroke: var(--bg); stroke-width: 2px; cursor: pointer; }

.donut-center-name { font-size: 15px; fill: var(--text-dim); }

.donut-center-value { font-size: 26px; font-weight: 700; fill: var(--text); }

.slope-area { fill: rgba(79, 143, 222, 0.12); }

.slope-line {
  fill: none;
  stroke: var(--series-a);
  stroke-width: 3px;
  stroke-linecap: round;
}

.slope-point { fill: var(--series-a); stroke: var(--bg); stroke-width: 2px; }

.point-value {
  font-size: 13px;
  fill: var(--text);
  font-variant-numeric: tabular-nums;
  text-anchor: middle;
}

.axis-label { font-size: 12px; fill: var(--text-dim); text-anchor: middle; }

/* tooltip + detail panel */

.tooltip {
  position: absolute;
  right: 0.5rem;
  top: -0.25rem;
  transform: translateY(-100%);
  background: #0a0d11;
  border: 1px solid var(--panel-edge);
  border-radius: 4px;
  padding: 0.35rem 0.6rem;
  font-size: 0.75rem;
  white-space: pre-line;
  pointer-events: none;
  z-index: 10;
}

.tooltip.overlay-tip {
  top: 0.5rem;
  transform: none;
}

.detail-panel {
  min-height: 3.5rem;
  margin-top: 0.75rem;
}

.detail-inner {
  border-left: 3px solid var(--accent);
  padding: 0.4rem 0.8rem;
  background: rgba(228, 179, 74, 0.05);
  border-radius: 0 4px 4px 0;
}

.detail-category { font-weight: 700; margin-right: 0.6rem; }

.detail-value {
  color: var(--text-dim);
  font-size: 0.85rem;
  margin-right: 0.6rem;
  font-variant-numeric: tabular-nums;
}

.detail-note {
  display: block;
  font-size: 0.8rem;
  color: var(--text-dim);
  margin-top: 0.2rem;
}

.callout {
  margin: 1rem 0 0;
  padding: 0.75rem 1rem;
  border-left: 3px solid var(--series-a);
  background: rgba(79, 143, 222, 0.07);
  font-size: 0.92rem;
  font-style: italic;
  color: var(--text);
  border-radius: 0 4px 4px 0;
}

.recommendations {
  padding-left: 1.2rem;
}

.recommendations li { margin-bottom: 0.9rem; }

.footer {
  border-top: 1px solid var(--panel-edge);
  text-align: center;
  color: var(--text-dim);
  font-size: 0.8rem;
  padding: 2rem 1rem;
}

@media (max-width: 640px) {
  .chart-row { grid-template-columns: 7rem 1fr; }
  .chart-body.butterfly .chart-row { grid-template-columns: 1fr 6rem 1fr; }
  .row-label { font-size: 0.72rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_defines_series_palette() {
        assert!(GLOBAL_CSS.contains("--series-a"));
        assert!(GLOBAL_CSS.contains("--series-b"));
        assert!(GLOBAL_CSS.contains("--series-c"));
    }

    #[test]
    fn css_enables_smooth_anchor_scrolling() {
        assert!(GLOBAL_CSS.contains("scroll-behavior: smooth"));
    }
}
