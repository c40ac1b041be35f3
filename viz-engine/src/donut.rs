//! Arc geometry for the donut chart.

use std::f64::consts::TAU;

/// One ring segment, angles in radians, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl ArcSegment {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Partition the full ring into per-value arcs proportional to value.
/// Non-positive values get zero-sweep arcs.
pub fn ring_segments(values: &[f64]) -> Vec<ArcSegment> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut start = -TAU / 4.0;
    values
        .iter()
        .enumerate()
        .map(|(index, &v)| {
            let sweep = if total > 0.0 && v > 0.0 {
                v / total * TAU
            } else {
                0.0
            };
            let seg = ArcSegment {
                index,
                start,
                end: start + sweep,
            };
            start += sweep;
            seg
        })
        .collect()
}

/// Outer radius of a segment; the selected one bulges slightly.
pub fn segment_radius(base: f64, selected: bool, bump: f64) -> f64 {
    if selected {
        base + bump
    } else {
        base
    }
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path for an annular segment between `r_inner` and `r_outer`.
/// Returns an empty string for degenerate sweeps, which the view skips.
pub fn annular_path(cx: f64, cy: f64, r_outer: f64, r_inner: f64, seg: &ArcSegment) -> String {
    let sweep = seg.sweep();
    if sweep <= 0.0 || r_outer <= 0.0 {
        return String::new();
    }
    // A full circle degenerates as a single arc; nudge the end in a hair.
    let end = if sweep >= TAU {
        seg.start + TAU - 1e-4
    } else {
        seg.end
    };
    let large = if end - seg.start > TAU / 2.0 { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, r_outer, seg.start);
    let (x1, y1) = polar(cx, cy, r_outer, end);
    let (x2, y2) = polar(cx, cy, r_inner, end);
    let (x3, y3) = polar(cx, cy, r_inner, seg.start);
    format!(
        "M {x0:.3} {y0:.3} A {r_outer:.3} {r_outer:.3} 0 {large} 1 {x1:.3} {y1:.3} \
         L {x2:.3} {y2:.3} A {r_inner:.3} {r_inner:.3} 0 {large} 0 {x3:.3} {y3:.3} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_cover_the_ring_in_order() {
        let segs = ring_segments(&[24.0, 31.0, 27.0, 13.0, 5.0]);
        assert_eq!(segs.len(), 5);
        assert!((segs[0].start - (-TAU / 4.0)).abs() < 1e-12);
        for w in segs.windows(2) {
            assert!((w[0].end - w[1].start).abs() < 1e-12);
        }
        let total: f64 = segs.iter().map(|s| s.sweep()).sum();
        assert!((total - TAU).abs() < 1e-9);
        // Sweep proportional to value.
        assert!((segs[1].sweep() - 0.31 * TAU).abs() < 1e-9);
    }

    #[test]
    fn zero_values_get_zero_sweep() {
        let segs = ring_segments(&[10.0, 0.0, 30.0]);
        assert_eq!(segs[1].sweep(), 0.0);
        assert!(annular_path(0.0, 0.0, 100.0, 60.0, &segs[1]).is_empty());
    }

    #[test]
    fn selected_segment_bulges() {
        assert_eq!(segment_radius(100.0, false, 8.0), 100.0);
        assert_eq!(segment_radius(100.0, true, 8.0), 108.0);
    }

    #[test]
    fn large_arc_flag_flips_past_half_circle() {
        let small = ArcSegment {
            index: 0,
            start: 0.0,
            end: 1.0,
        };
        let big = ArcSegment {
            index: 1,
            start: 0.0,
            end: 4.0,
        };
        assert!(annular_path(0.0, 0.0, 100.0, 60.0, &small).contains(" 0 1 "));
        assert!(annular_path(0.0, 0.0, 100.0, 60.0, &big).contains(" 1 1 "));
    }
}
