//! Squarified treemap layout plus the label-density fallback rules.

/// Axis-aligned rectangle in chart pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    fn shortest_side(&self) -> f64 {
        self.w.min(self.h)
    }
}

/// One laid-out tile, tagged with the index of the record it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreemapRect {
    pub index: usize,
    pub rect: Rect,
}

/// Squarified layout: partitions `bounds` into tiles whose areas are
/// proportional to `values`, keeping aspect ratios close to 1. Tiles come
/// back in input order. Non-positive values get zero-area tiles, which the
/// renderer skips.
pub fn squarify(values: &[f64], bounds: Rect) -> Vec<TreemapRect> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut out: Vec<TreemapRect> = Vec::with_capacity(values.len());
    if total <= 0.0 || bounds.area() <= 0.0 {
        for index in 0..values.len() {
            out.push(TreemapRect {
                index,
                rect: Rect::new(bounds.x, bounds.y, 0.0, 0.0),
            });
        }
        return out;
    }

    let scale = bounds.area() / total;
    let mut remaining = bounds;
    // Current row: (original index, scaled area).
    let mut row: Vec<(usize, f64)> = Vec::new();

    for (index, &value) in values.iter().enumerate() {
        if value <= 0.0 {
            out.push(TreemapRect {
                index,
                rect: Rect::new(remaining.x, remaining.y, 0.0, 0.0),
            });
            continue;
        }
        let area = value * scale;
        let side = remaining.shortest_side();
        if row.is_empty() || worst_ratio(&row, Some(area), side) <= worst_ratio(&row, None, side) {
            row.push((index, area));
        } else {
            flush_row(&row, &mut remaining, &mut out);
            row.clear();
            row.push((index, area));
        }
    }
    if !row.is_empty() {
        flush_row(&row, &mut remaining, &mut out);
    }
    out.sort_by_key(|t| t.index);
    out
}

/// Worst (largest) aspect ratio the row would have on a strip along a side
/// of length `side`, optionally with one more area appended.
fn worst_ratio(row: &[(usize, f64)], extra: Option<f64>, side: f64) -> f64 {
    let mut sum = 0.0;
    let mut min_a = f64::INFINITY;
    let mut max_a: f64 = 0.0;
    for &(_, a) in row {
        sum += a;
        min_a = min_a.min(a);
        max_a = max_a.max(a);
    }
    if let Some(a) = extra {
        sum += a;
        min_a = min_a.min(a);
        max_a = max_a.max(a);
    }
    if sum <= 0.0 || side <= 0.0 {
        return f64::INFINITY;
    }
    let s2 = sum * sum;
    let w2 = side * side;
    (w2 * max_a / s2).max(s2 / (w2 * min_a))
}

fn flush_row(row: &[(usize, f64)], remaining: &mut Rect, out: &mut Vec<TreemapRect>) {
    let sum: f64 = row.iter().map(|&(_, a)| a).sum();
    if sum <= 0.0 {
        return;
    }
    if remaining.w >= remaining.h {
        // Vertical strip against the left edge.
        let strip_w = (sum / remaining.h).min(remaining.w);
        let mut y = remaining.y;
        for &(index, a) in row {
            let h = a / strip_w;
            out.push(TreemapRect {
                index,
                rect: Rect::new(remaining.x, y, strip_w, h),
            });
            y += h;
        }
        remaining.x += strip_w;
        remaining.w -= strip_w;
    } else {
        // Horizontal strip against the top edge.
        let strip_h = (sum / remaining.w).min(remaining.h);
        let mut x = remaining.x;
        for &(index, a) in row {
            let w = a / strip_h;
            out.push(TreemapRect {
                index,
                rect: Rect::new(x, remaining.y, w, strip_h),
            });
            x += w;
        }
        remaining.y += strip_h;
        remaining.h -= strip_h;
    }
}

/// How much text a tile can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// Wrapped label plus value.
    Full,
    /// Bare value only.
    ValueOnly,
    /// Nothing, tile is decorative (or sub-pixel).
    Hidden,
}

/// Tiles below 70x50 px lose the wrapped label; tiles below 28x16 px lose
/// the value too; anything under a pixel in either dimension renders nothing.
pub fn label_mode(w: f64, h: f64) -> LabelMode {
    if w < 1.0 || h < 1.0 {
        LabelMode::Hidden
    } else if w >= 70.0 && h >= 50.0 {
        LabelMode::Full
    } else if w >= 28.0 && h >= 16.0 {
        LabelMode::ValueOnly
    } else {
        LabelMode::Hidden
    }
}

/// Word-wrap a label onto at most two lines of `max_chars`; a label that
/// still does not fit is truncated with an ellipsis.
pub fn wrap_label(label: &str, max_chars: usize) -> Vec<String> {
    if max_chars == 0 {
        return Vec::new();
    }
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in label.split_whitespace() {
        let candidate_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if candidate_len <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
            if lines.len() == 2 {
                break;
            }
        }
    }
    if !current.is_empty() && lines.len() < 2 {
        lines.push(current);
    }
    if lines.len() > 2 {
        lines.truncate(2);
    }
    // Truncate any line that still overflows (single long word).
    for line in &mut lines {
        if line.chars().count() > max_chars {
            let keep: String = line.chars().take(max_chars.saturating_sub(1)).collect();
            *line = format!("{keep}\u{2026}");
        }
    }
    // If the label had more words than the two lines could take, mark it.
    let shown: usize = lines.iter().map(|l| l.split_whitespace().count()).sum();
    if shown < label.split_whitespace().count() {
        if let Some(last) = lines.last_mut() {
            if !last.ends_with('\u{2026}') {
                last.push('\u{2026}');
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREATS: [f64; 6] = [43.0, 22.0, 15.0, 10.0, 7.0, 3.0];

    #[test]
    fn areas_are_proportional_and_order_preserving() {
        let bounds = Rect::new(0.0, 0.0, 720.0, 420.0);
        let tiles = squarify(&THREATS, bounds);
        assert_eq!(tiles.len(), 6);
        let areas: Vec<f64> = tiles.iter().map(|t| t.rect.area()).collect();
        // Monotonically ordered to match the value order.
        for w in areas.windows(2) {
            assert!(w[0] > w[1], "areas out of order: {w:?}");
        }
        let total: f64 = areas.iter().sum();
        assert!((total - bounds.area()).abs() < 1e-6);
        // 43 over 100 of the canvas, within float noise.
        let expect = 43.0 / 100.0 * bounds.area();
        assert!((areas[0] - expect).abs() < 1e-6);
        // Tiles come back in input order.
        let indices: Vec<usize> = tiles.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn tiles_stay_inside_the_bounds() {
        let bounds = Rect::new(10.0, 20.0, 300.0, 200.0);
        for t in squarify(&THREATS, bounds) {
            let r = t.rect;
            assert!(r.x >= bounds.x - 1e-6 && r.y >= bounds.y - 1e-6);
            assert!(r.x + r.w <= bounds.x + bounds.w + 1e-6);
            assert!(r.y + r.h <= bounds.y + bounds.h + 1e-6);
        }
    }

    #[test]
    fn non_positive_values_become_empty_tiles() {
        let tiles = squarify(&[10.0, 0.0, 5.0], Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(tiles[1].rect.area(), 0.0);
        assert!(tiles[0].rect.area() > tiles[2].rect.area());
    }

    #[test]
    fn label_density_degrades_with_tile_size() {
        assert_eq!(label_mode(120.0, 80.0), LabelMode::Full);
        // Below either full-label threshold: value only.
        assert_eq!(label_mode(69.0, 80.0), LabelMode::ValueOnly);
        assert_eq!(label_mode(120.0, 49.0), LabelMode::ValueOnly);
        // Too small even for the value.
        assert_eq!(label_mode(20.0, 12.0), LabelMode::Hidden);
        // Sub-pixel renders nothing.
        assert_eq!(label_mode(0.5, 80.0), LabelMode::Hidden);
        assert_eq!(label_mode(80.0, 0.9), LabelMode::Hidden);
    }

    #[test]
    fn labels_wrap_to_at_most_two_lines() {
        assert_eq!(wrap_label("Ransomware", 12), vec!["Ransomware"]);
        assert_eq!(
            wrap_label("Cloud Misconfigurations", 15),
            vec!["Cloud".to_string(), "Misconfigurati\u{2026}".to_string()]
        );
        let lines = wrap_label("A very long label with many words indeed", 10);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('\u{2026}'));
    }
}
