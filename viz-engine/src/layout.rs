//! Linear scales and bar/line geometry shared by the bar-family charts.

/// Fraction of the track a value occupies against a fixed axis maximum.
/// The maximum is fixed per chart family (not the data's own max) so scales
/// stay comparable across charts; values are clamped into [0, 1].
pub fn scale_frac(value: f64, axis_max: f64) -> f64 {
    if axis_max <= 0.0 {
        return 0.0;
    }
    (value / axis_max).clamp(0.0, 1.0)
}

/// Pixel length of a bar on a track of `track_px`.
pub fn scale_px(value: f64, axis_max: f64, track_px: f64) -> f64 {
    scale_frac(value, axis_max) * track_px
}

/// Where a bar's value label sits. Short bars put the label outside the fill
/// in the series color; once the bar passes the threshold the label moves
/// inside and flips to white so it stays legible against the fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    InsideEnd,
    OutsideEnd,
}

pub fn bar_label_anchor(bar_px: f64, min_inside_px: f64) -> LabelAnchor {
    if bar_px >= min_inside_px {
        LabelAnchor::InsideEnd
    } else {
        LabelAnchor::OutsideEnd
    }
}

/// One run of a stacked bar: offset from the track start plus length, both in
/// pixels. Raw units are stacked directly, no normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackSegment {
    pub index: usize,
    pub offset_px: f64,
    pub length_px: f64,
}

pub fn stack(values: &[f64], axis_max: f64, track_px: f64) -> Vec<StackSegment> {
    let mut offset = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, &v)| {
            let length_px = scale_px(v, axis_max, track_px);
            let seg = StackSegment {
                index,
                offset_px: offset,
                length_px,
            };
            offset += length_px;
            seg
        })
        .collect()
}

/// Points of a polyline over an ordered category axis: categories spread
/// evenly across the width, values scaled top-down against the axis maximum.
pub fn polyline_points(values: &[f64], axis_max: f64, width: f64, height: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let step = if n > 1 { width / (n - 1) as f64 } else { 0.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if n > 1 { i as f64 * step } else { width / 2.0 };
            let y = height - scale_px(v, axis_max, height);
            (x, y)
        })
        .collect()
}

/// Total polyline length; the draw-in animation runs the stroke dash offset
/// from this down to zero.
pub fn path_length(points: &[(f64, f64)]) -> f64 {
    points
        .windows(2)
        .map(|w| {
            let (x1, y1) = w[0];
            let (x2, y2) = w[1];
            ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
        })
        .sum()
}

/// SVG `points` attribute for a polyline.
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_scale_is_proportional_and_clamped() {
        // 13 vs 6 against the same axis keeps the exact 13/6 length ratio.
        let private = scale_px(6.0, 60.0, 300.0);
        let public = scale_px(13.0, 60.0, 300.0);
        assert!((public / private - 13.0 / 6.0).abs() < 1e-9);
        assert_eq!(private, 30.0);
        assert_eq!(public, 65.0);
        assert_eq!(scale_px(90.0, 60.0, 300.0), 300.0);
        assert_eq!(scale_px(-4.0, 60.0, 300.0), 0.0);
        assert_eq!(scale_px(30.0, 0.0, 300.0), 0.0);
    }

    #[test]
    fn label_anchor_flips_at_the_pixel_threshold() {
        assert_eq!(bar_label_anchor(20.0, 48.0), LabelAnchor::OutsideEnd);
        assert_eq!(bar_label_anchor(48.0, 48.0), LabelAnchor::InsideEnd);
        assert_eq!(bar_label_anchor(120.0, 48.0), LabelAnchor::InsideEnd);
    }

    #[test]
    fn stack_runs_end_to_end_without_normalizing() {
        let segs = stack(&[285.0, 55.0, 40.0], 900.0, 900.0);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].offset_px, 0.0);
        assert_eq!(segs[0].length_px, 285.0);
        assert_eq!(segs[1].offset_px, 285.0);
        assert_eq!(segs[2].offset_px, 340.0);
        assert_eq!(segs[2].offset_px + segs[2].length_px, 380.0);
    }

    #[test]
    fn polyline_spreads_categories_and_inverts_y() {
        let pts = polyline_points(&[0.0, 50.0, 100.0], 100.0, 200.0, 100.0);
        assert_eq!(pts, vec![(0.0, 100.0), (100.0, 50.0), (200.0, 0.0)]);
        assert!(polyline_points(&[], 100.0, 200.0, 100.0).is_empty());
    }

    #[test]
    fn path_length_sums_segment_distances() {
        let pts = vec![(0.0, 0.0), (3.0, 4.0), (3.0, 10.0)];
        assert!((path_length(&pts) - 11.0).abs() < 1e-9);
        assert_eq!(points_attr(&pts), "0.00,0.00 3.00,4.00 3.00,10.00");
    }
}
