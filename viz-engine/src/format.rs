//! Value and delta formatting used in tooltips, labels, and callouts.

use report_core::Unit;

/// "43%" (whole percentages; the survey publishes no fractional points).
pub fn pct_label(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

/// "$285K" for thousands of USD.
pub fn usd_label(value: f64) -> String {
    format!("${}K", value.round() as i64)
}

pub fn format_value(value: f64, unit: Unit) -> String {
    match unit {
        Unit::Percent => pct_label(value),
        Unit::UsdThousands => usd_label(value),
    }
}

/// Percentage-point gap between two compared metrics, `second - first`.
/// The "+" prefix appears iff the second metric leads; ties and deficits get
/// no prefix beyond the natural minus sign.
pub fn signed_gap_pp(first: f64, second: f64) -> String {
    let delta = second - first;
    let rounded = delta.round() as i64;
    if rounded > 0 {
        format!("+{rounded}pp")
    } else {
        format!("{rounded}pp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_labels_match_published_style() {
        assert_eq!(pct_label(43.0), "43%");
        assert_eq!(usd_label(285.0), "$285K");
        assert_eq!(format_value(6.0, Unit::Percent), "6%");
        assert_eq!(format_value(240.0, Unit::UsdThousands), "$240K");
    }

    #[test]
    fn gap_carries_plus_prefix_only_when_second_leads() {
        // Quarterly board reporting: public 63 vs private 39.
        assert_eq!(signed_gap_pp(39.0, 63.0), "+24pp");
        assert_eq!(signed_gap_pp(63.0, 39.0), "-24pp");
        assert_eq!(signed_gap_pp(8.0, 8.0), "0pp");
    }
}
