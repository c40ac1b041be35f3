use crate::Unit;

/// One canonical survey number. Every chart projects out of this table, so a
/// figure quoted in two places cannot drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRow {
    pub key: &'static str,
    pub value: f64,
    pub unit: Unit,
}

const fn pct(key: &'static str, value: f64) -> MetricRow {
    MetricRow {
        key,
        value,
        unit: Unit::Percent,
    }
}

const fn usd(key: &'static str, value: f64) -> MetricRow {
    MetricRow {
        key,
        value,
        unit: Unit::UsdThousands,
    }
}

/// The 2026 survey, one row per published figure.
pub const SURVEY: &[MetricRow] = &[
    // Threat priorities: share of CISOs naming each vector their top concern.
    pct("threat.third_party.share", 43.0),
    pct("threat.ai_attacks.share", 22.0),
    pct("threat.cloud_misconfig.share", 15.0),
    pct("threat.insider.share", 10.0),
    pct("threat.ransomware.share", 7.0),
    pct("threat.other.share", 3.0),
    // AI security leadership ownership, private vs public companies.
    pct("ai_leader.dedicated.private", 6.0),
    pct("ai_leader.dedicated.public", 13.0),
    pct("ai_leader.shared_ds.private", 18.0),
    pct("ai_leader.shared_ds.public", 24.0),
    pct("ai_leader.ciso_owned.private", 49.0),
    pct("ai_leader.ciso_owned.public", 41.0),
    pct("ai_leader.no_owner.private", 27.0),
    pct("ai_leader.no_owner.public", 22.0),
    // Board reporting cadence.
    pct("board.quarterly.private", 39.0),
    pct("board.quarterly.public", 63.0),
    pct("board.monthly.private", 12.0),
    pct("board.monthly.public", 18.0),
    pct("board.semiannual.private", 21.0),
    pct("board.semiannual.public", 11.0),
    pct("board.annual.private", 17.0),
    pct("board.annual.public", 6.0),
    pct("board.incident_only.private", 11.0),
    pct("board.incident_only.public", 2.0),
    // Reporting lines: who the CISO reports to.
    pct("report_line.cio.private", 38.0),
    pct("report_line.cio.public", 46.0),
    pct("report_line.ceo.private", 24.0),
    pct("report_line.ceo.public", 11.0),
    pct("report_line.cto.private", 15.0),
    pct("report_line.cto.public", 9.0),
    pct("report_line.cfo.private", 9.0),
    pct("report_line.cfo.public", 14.0),
    pct("report_line.board.private", 8.0),
    pct("report_line.board.public", 8.0),
    pct("report_line.coo.private", 6.0),
    pct("report_line.coo.public", 12.0),
    // Compensation mix by company revenue band, thousands of USD.
    usd("comp.under_1b.base", 285.0),
    usd("comp.under_1b.bonus", 55.0),
    usd("comp.under_1b.equity", 40.0),
    usd("comp.1b_10b.base", 340.0),
    usd("comp.1b_10b.bonus", 95.0),
    usd("comp.1b_10b.equity", 110.0),
    usd("comp.over_10b.base", 410.0),
    usd("comp.over_10b.bonus", 160.0),
    usd("comp.over_10b.equity", 240.0),
    // Median total compensation by region, thousands of USD.
    usd("comp.region.north_america", 545.0),
    usd("comp.region.emea", 398.0),
    usd("comp.region.apac", 362.0),
    usd("comp.region.latam", 287.0),
    // Formal AI-governance program adoption by survey year.
    pct("governance.adoption.2022", 14.0),
    pct("governance.adoption.2023", 27.0),
    pct("governance.adoption.2024", 41.0),
    pct("governance.adoption.2025", 58.0),
    // AI-governance maturity distribution (sums to 100 by construction).
    pct("maturity.ad_hoc", 24.0),
    pct("maturity.developing", 31.0),
    pct("maturity.defined", 27.0),
    pct("maturity.managed", 13.0),
    pct("maturity.optimized", 5.0),
    // Security team size, today vs expected next year.
    pct("team.under_10.now", 31.0),
    pct("team.under_10.next", 26.0),
    pct("team.10_50.now", 42.0),
    pct("team.10_50.next", 40.0),
    pct("team.51_200.now", 19.0),
    pct("team.51_200.next", 23.0),
    pct("team.over_200.now", 8.0),
    pct("team.over_200.next", 11.0),
    // Functional ownership by region.
    pct("function.secops.na", 92.0),
    pct("function.secops.emea", 89.0),
    pct("function.identity.na", 84.0),
    pct("function.identity.emea", 81.0),
    pct("function.ai_governance.na", 47.0),
    pct("function.ai_governance.emea", 52.0),
    pct("function.fraud.na", 31.0),
    pct("function.fraud.emea", 26.0),
    pct("function.physical.na", 18.0),
    pct("function.physical.emea", 24.0),
    // What next-generation security leaders weigh most in an offer.
    pct("nextgen.equity_upside", 58.0),
    pct("nextgen.board_access", 52.0),
    pct("nextgen.ai_mandate", 47.0),
    pct("nextgen.team_budget", 39.0),
    pct("nextgen.brand", 21.0),
];

/// Look up a survey figure by key.
pub fn try_metric(key: &str) -> Option<MetricRow> {
    SURVEY.iter().copied().find(|row| row.key == key)
}

/// Value of a survey figure. An unknown key is an authoring typo, caught by
/// the projection tests; at runtime it degrades to 0.0 rather than crashing.
pub fn metric(key: &str) -> f64 {
    try_metric(key).map(|row| row.value).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        for (i, row) in SURVEY.iter().enumerate() {
            assert!(
                !SURVEY[i + 1..].iter().any(|other| other.key == row.key),
                "duplicate key {}",
                row.key
            );
        }
    }

    #[test]
    fn lookup_resolves_known_and_rejects_unknown() {
        assert_eq!(metric("threat.third_party.share"), 43.0);
        assert_eq!(metric("board.quarterly.public"), 63.0);
        assert!(try_metric("threat.quantum.share").is_none());
        assert_eq!(metric("threat.quantum.share"), 0.0);
    }

    #[test]
    fn percentages_stay_in_range() {
        for row in SURVEY {
            if row.unit == Unit::Percent {
                assert!(
                    (0.0..=100.0).contains(&row.value),
                    "{} out of range",
                    row.key
                );
            }
        }
    }

    #[test]
    fn maturity_distribution_sums_to_100() {
        let total: f64 = SURVEY
            .iter()
            .filter(|row| row.key.starts_with("maturity."))
            .map(|row| row.value)
            .sum();
        assert_eq!(total, 100.0);
    }
}
