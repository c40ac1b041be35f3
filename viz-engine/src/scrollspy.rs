//! Which navigation section is "current" for a given scroll position.

/// Index of the last section whose top offset has been scrolled past, where
/// "past" means above `scroll_y` plus a third of the viewport. `None` until
/// the first section's top crosses that line (in practice the first section
/// starts at the top, so this is only `None` for an empty list).
pub fn active_section(tops: &[f64], scroll_y: f64, viewport_h: f64) -> Option<usize> {
    let line = scroll_y + viewport_h / 3.0;
    let mut active = None;
    for (i, &top) in tops.iter().enumerate() {
        if top <= line {
            active = Some(i);
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPS: [f64; 4] = [0.0, 800.0, 1700.0, 2600.0];

    #[test]
    fn last_section_scrolled_past_wins() {
        assert_eq!(active_section(&TOPS, 0.0, 900.0), Some(0));
        // 900/3 = 300 past the fold: section 1 at 800 not yet reached.
        assert_eq!(active_section(&TOPS, 400.0, 900.0), Some(0));
        assert_eq!(active_section(&TOPS, 500.0, 900.0), Some(1));
        assert_eq!(active_section(&TOPS, 3000.0, 900.0), Some(3));
    }

    #[test]
    fn empty_list_has_no_active_section() {
        assert_eq!(active_section(&[], 500.0, 900.0), None);
    }

    #[test]
    fn section_activates_exactly_at_the_third_line() {
        assert_eq!(active_section(&TOPS, 500.0, 900.0), Some(1)); // 800 == 500+300
        assert_eq!(active_section(&TOPS, 499.0, 900.0), Some(0));
    }
}
