//! Per-chart projections over the canonical survey table. Each function is a
//! pure selection; the numbers themselves live only in [`crate::table`].

use crate::table::metric;
use crate::{ChartRecord, MetricValue};

fn pair(category: &'static str, private_key: &str, public_key: &str) -> ChartRecord {
    ChartRecord::new(
        category,
        vec![
            MetricValue::pct("Private", metric(private_key)),
            MetricValue::pct("Public", metric(public_key)),
        ],
    )
}

/// Treemap: share of CISOs naming each vector their top concern.
pub fn threat_priorities() -> Vec<ChartRecord> {
    vec![
        ChartRecord::new(
            "Third-party Risk",
            vec![MetricValue::pct("Share", metric("threat.third_party.share"))],
        )
        .describe("Vendor compromise and supply-chain exposure")
        .emphasize(),
        ChartRecord::new(
            "AI-enhanced Attacks",
            vec![MetricValue::pct("Share", metric("threat.ai_attacks.share"))],
        )
        .describe("Model-assisted phishing, deepfakes, automated recon")
        .emphasize(),
        ChartRecord::new(
            "Cloud Misconfigurations",
            vec![MetricValue::pct("Share", metric("threat.cloud_misconfig.share"))],
        ),
        ChartRecord::new(
            "Insider Threats",
            vec![MetricValue::pct("Share", metric("threat.insider.share"))],
        ),
        ChartRecord::new(
            "Ransomware",
            vec![MetricValue::pct("Share", metric("threat.ransomware.share"))],
        ),
        ChartRecord::new(
            "Other Vectors",
            vec![MetricValue::pct("Share", metric("threat.other.share"))],
        ),
    ]
}

/// Grouped bars: who owns AI security, private vs public companies.
pub fn ai_leadership() -> Vec<ChartRecord> {
    vec![
        pair(
            "Dedicated Leader",
            "ai_leader.dedicated.private",
            "ai_leader.dedicated.public",
        )
        .describe("A named executive owns AI security full-time")
        .emphasize(),
        pair(
            "Shared with Data Science",
            "ai_leader.shared_ds.private",
            "ai_leader.shared_ds.public",
        ),
        pair(
            "Owned by the CISO",
            "ai_leader.ciso_owned.private",
            "ai_leader.ciso_owned.public",
        ),
        pair(
            "No Defined Owner",
            "ai_leader.no_owner.private",
            "ai_leader.no_owner.public",
        )
        .describe("Nobody is accountable for AI security outcomes"),
    ]
}

/// Lollipop rows: how often the CISO reports to the board.
pub fn board_reporting() -> Vec<ChartRecord> {
    vec![
        pair("Monthly", "board.monthly.private", "board.monthly.public"),
        pair(
            "Quarterly",
            "board.quarterly.private",
            "board.quarterly.public",
        )
        .emphasize(),
        pair(
            "Twice a Year",
            "board.semiannual.private",
            "board.semiannual.public",
        ),
        pair("Annually", "board.annual.private", "board.annual.public"),
        pair(
            "Only After Incidents",
            "board.incident_only.private",
            "board.incident_only.public",
        )
        .describe("Board hears from security only when something breaks"),
    ]
}

/// Butterfly: the CISO's direct reporting line.
pub fn reporting_lines() -> Vec<ChartRecord> {
    vec![
        pair("CIO", "report_line.cio.private", "report_line.cio.public").emphasize(),
        pair("CEO", "report_line.ceo.private", "report_line.ceo.public"),
        pair("CTO", "report_line.cto.private", "report_line.cto.public"),
        pair("CFO", "report_line.cfo.private", "report_line.cfo.public"),
        pair("COO", "report_line.coo.private", "report_line.coo.public"),
        pair(
            "Board Directly",
            "report_line.board.private",
            "report_line.board.public",
        ),
    ]
}

/// Stacked currency bars: compensation mix by company revenue band.
pub fn compensation_mix() -> Vec<ChartRecord> {
    let band = |category, prefix: &str| {
        ChartRecord::new(
            category,
            vec![
                MetricValue::usd("Base", metric(&format!("{prefix}.base"))),
                MetricValue::usd("Bonus", metric(&format!("{prefix}.bonus"))),
                MetricValue::usd("Equity", metric(&format!("{prefix}.equity"))),
            ],
        )
    };
    vec![
        band("Under $1B revenue", "comp.under_1b"),
        band("$1B\u{2013}$10B", "comp.1b_10b"),
        band("Over $10B", "comp.over_10b").emphasize(),
    ]
}

/// Single-series bars: median total compensation by region.
pub fn international_compensation() -> Vec<ChartRecord> {
    vec![
        ChartRecord::new(
            "North America",
            vec![MetricValue::usd("Median", metric("comp.region.north_america"))],
        )
        .emphasize(),
        ChartRecord::new(
            "EMEA",
            vec![MetricValue::usd("Median", metric("comp.region.emea"))],
        ),
        ChartRecord::new(
            "APAC",
            vec![MetricValue::usd("Median", metric("comp.region.apac"))],
        ),
        ChartRecord::new(
            "Latin America",
            vec![MetricValue::usd("Median", metric("comp.region.latam"))],
        ),
    ]
}

/// Slope/line: formal AI-governance program adoption by survey year.
pub fn governance_adoption() -> Vec<ChartRecord> {
    vec![
        ChartRecord::new(
            "2022",
            vec![MetricValue::pct("Adoption", metric("governance.adoption.2022"))],
        ),
        ChartRecord::new(
            "2023",
            vec![MetricValue::pct("Adoption", metric("governance.adoption.2023"))],
        ),
        ChartRecord::new(
            "2024",
            vec![MetricValue::pct("Adoption", metric("governance.adoption.2024"))],
        ),
        ChartRecord::new(
            "2025",
            vec![MetricValue::pct("Adoption", metric("governance.adoption.2025"))],
        )
        .emphasize(),
    ]
}

/// Donut: AI-governance maturity distribution.
pub fn maturity_distribution() -> Vec<ChartRecord> {
    vec![
        ChartRecord::new(
            "Ad Hoc",
            vec![MetricValue::pct("Share", metric("maturity.ad_hoc"))],
        ),
        ChartRecord::new(
            "Developing",
            vec![MetricValue::pct("Share", metric("maturity.developing"))],
        ),
        ChartRecord::new(
            "Defined",
            vec![MetricValue::pct("Share", metric("maturity.defined"))],
        ),
        ChartRecord::new(
            "Managed",
            vec![MetricValue::pct("Share", metric("maturity.managed"))],
        ),
        ChartRecord::new(
            "Optimized",
            vec![MetricValue::pct("Share", metric("maturity.optimized"))],
        )
        .emphasize(),
    ]
}

/// Grouped bars: security-team size today vs expected next year.
pub fn team_size_shift() -> Vec<ChartRecord> {
    let shift = |category, prefix: &str| {
        ChartRecord::new(
            category,
            vec![
                MetricValue::pct("Today", metric(&format!("{prefix}.now"))),
                MetricValue::pct("Next Year", metric(&format!("{prefix}.next"))),
            ],
        )
    };
    vec![
        shift("Under 10 people", "team.under_10"),
        shift("10\u{2013}50", "team.10_50"),
        shift("51\u{2013}200", "team.51_200").emphasize(),
        shift("Over 200", "team.over_200"),
    ]
}

/// Grouped bars: functional ownership, North America vs EMEA.
pub fn functional_responsibilities() -> Vec<ChartRecord> {
    let own = |category, prefix: &str| {
        ChartRecord::new(
            category,
            vec![
                MetricValue::pct("North America", metric(&format!("{prefix}.na"))),
                MetricValue::pct("EMEA", metric(&format!("{prefix}.emea"))),
            ],
        )
    };
    vec![
        own("Security Operations", "function.secops"),
        own("Identity & Access", "function.identity"),
        own("AI Governance", "function.ai_governance").emphasize(),
        own("Fraud Prevention", "function.fraud"),
        own("Physical Security", "function.physical"),
    ]
}

/// Single-series bars: what next-generation leaders weigh most in an offer.
pub fn nextgen_priorities() -> Vec<ChartRecord> {
    vec![
        ChartRecord::new(
            "Equity Upside",
            vec![MetricValue::pct("Cited", metric("nextgen.equity_upside"))],
        )
        .emphasize(),
        ChartRecord::new(
            "Board Access",
            vec![MetricValue::pct("Cited", metric("nextgen.board_access"))],
        ),
        ChartRecord::new(
            "An AI Mandate",
            vec![MetricValue::pct("Cited", metric("nextgen.ai_mandate"))],
        ),
        ChartRecord::new(
            "Team Budget",
            vec![MetricValue::pct("Cited", metric("nextgen.team_budget"))],
        ),
        ChartRecord::new(
            "Company Brand",
            vec![MetricValue::pct("Cited", metric("nextgen.brand"))],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_projections() -> Vec<(&'static str, Vec<ChartRecord>)> {
        vec![
            ("threat_priorities", threat_priorities()),
            ("ai_leadership", ai_leadership()),
            ("board_reporting", board_reporting()),
            ("reporting_lines", reporting_lines()),
            ("compensation_mix", compensation_mix()),
            ("international_compensation", international_compensation()),
            ("governance_adoption", governance_adoption()),
            ("maturity_distribution", maturity_distribution()),
            ("team_size_shift", team_size_shift()),
            ("functional_responsibilities", functional_responsibilities()),
            ("nextgen_priorities", nextgen_priorities()),
        ]
    }

    /// A 0.0 figure in a projection means a key typo: every published number
    /// in the table is non-zero, and `metric` falls back to 0.0 on a miss.
    #[test]
    fn every_projection_key_resolves() {
        for (name, records) in all_projections() {
            for rec in &records {
                for m in &rec.metrics {
                    assert!(m.value > 0.0, "{name}/{}/{} did not resolve", rec.category, m.name);
                }
            }
        }
    }

    #[test]
    fn categories_are_unique_within_each_chart() {
        for (name, records) in all_projections() {
            for (i, rec) in records.iter().enumerate() {
                assert!(
                    !records[i + 1..].iter().any(|r| r.category == rec.category),
                    "{name} repeats {}",
                    rec.category
                );
            }
        }
    }

    #[test]
    fn threat_priorities_match_the_published_figures() {
        let recs = threat_priorities();
        let values: Vec<f64> = recs.iter().map(|r| r.primary()).collect();
        assert_eq!(values, vec![43.0, 22.0, 15.0, 10.0, 7.0, 3.0]);
        assert!(recs[0].emphasis && recs[1].emphasis);
    }

    #[test]
    fn dedicated_ai_leader_pair_is_6_vs_13() {
        let recs = ai_leadership();
        let lead = &recs[0];
        assert_eq!(lead.category, "Dedicated Leader");
        assert_eq!(lead.value_of("Private"), Some(6.0));
        assert_eq!(lead.value_of("Public"), Some(13.0));
    }

    #[test]
    fn quarterly_board_reporting_gap_is_24_points() {
        let recs = board_reporting();
        let quarterly = recs
            .iter()
            .find(|r| r.category == "Quarterly")
            .expect("quarterly row");
        let private = quarterly.value_of("Private").expect("private");
        let public = quarterly.value_of("Public").expect("public");
        assert_eq!(private, 39.0);
        assert_eq!(public, 63.0);
        assert_eq!(public - private, 24.0);
    }
}
