use crate::charts::{
    ButterflyChart, DonutChart, GroupedBarChart, LollipopChart, SlopeChart, StackedBarChart,
    TreemapChart, PCT_AXIS_MAX, USD_AXIS_MAX,
};
use crate::reveal::provide_motion;
use crate::theme::GLOBAL_CSS;
use leptos::*;
use leptos_meta::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Section anchors in page order; the nav bar and the scroll-spy both walk
/// this list.
pub const SECTIONS: [(&str, &str); 11] = [
    ("about", "About the Study"),
    ("executive-summary", "Executive Summary"),
    ("compensation", "Compensation"),
    ("reporting-structure", "Reporting Structure"),
    ("team-dynamics", "Team Dynamics"),
    ("functional-responsibilities", "Responsibilities"),
    ("ai-governance", "AI Governance"),
    ("threat-landscape", "Threat Landscape"),
    ("nextgen-leaders", "Next-Gen Leaders"),
    ("international", "International"),
    ("recommendations", "Recommendations"),
];

/// Index of the section currently in view, from the live scroll position.
#[cfg(target_arch = "wasm32")]
fn current_section() -> Option<usize> {
    let win = window()?;
    let doc = win.document()?;
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let viewport_h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let tops: Vec<f64> = SECTIONS
        .iter()
        .map(|(id, _)| {
            doc.get_element_by_id(id)
                .map(|el| el.get_bounding_client_rect().top() + scroll_y)
                .unwrap_or(f64::MAX)
        })
        .collect();
    viz_engine::active_section(&tops, scroll_y, viewport_h)
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_motion();
    let (active, set_active) = create_signal(0usize);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = &set_active;

    #[cfg(target_arch = "wasm32")]
    {
        create_effect(move |_| {
            let Some(win) = window() else {
                return;
            };
            if let Some(i) = current_section() {
                set_active.set(i);
            }
            let cb = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                if let Some(i) = current_section() {
                    set_active.set(i);
                }
            }));
            let _ = win.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
            on_cleanup(move || {
                if let Some(win) = window() {
                    let _ = win
                        .remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
                }
                drop(cb);
            });
        });
    }

    view! {
        <Style>{GLOBAL_CSS}</Style>
        <Title text="CISO Pulse 2026 — Compensation, Reporting & AI Governance"/>
        <NavBar active=active/>
        <header class="hero">
            <p class="kicker">"CISO Pulse \u{00b7} 2026 Survey"</p>
            <h1>"The Security Executive, Repriced"</h1>
            <p class="lede">
                "What 1,214 chief information security officers told us about pay, "
                "power, and the scramble to govern AI."
            </p>
        </header>
        <main class="report">
            <Section id="about" title="About the Study">
                <p>
                    "CISO Pulse surveyed 1,214 security executives between October 2025 and "
                    "January 2026, split across private (61%) and publicly traded (39%) "
                    "companies in twelve countries. Respondents answered 44 questions on "
                    "compensation, reporting lines, team plans, and AI-governance practice. "
                    "Figures are self-reported and unweighted; percentages for a question "
                    "may not sum to 100 where multiple answers were allowed."
                </p>
            </Section>

            <Section id="executive-summary" title="Executive Summary">
                <div class="stat-row">
                    <Stat value="$810K" label="median package at $10B+ revenue companies"/>
                    <Stat value="63%" label="of public boards hear from security quarterly"/>
                    <Stat value="58%" label="now run a formal AI-governance program"/>
                    <Stat value="43%" label="rank third-party risk as their top threat"/>
                </div>
                <p>
                    "Three stories dominate this year's data. Compensation keeps diverging "
                    "by listing status, with equity doing most of the work. The reporting "
                    "line is consolidating under the CIO at public companies while private "
                    "companies push the CISO closer to the CEO. And AI has arrived twice "
                    "over: as the second-ranked threat vector, and as a governance mandate "
                    "most security organizations only began formalizing in the last two years."
                </p>
            </Section>

            <Section id="compensation" title="Compensation">
                <p>
                    "Base salary differences across company size are real but modest; the "
                    "gap opens in variable pay. At companies over $10B in revenue, bonus "
                    "and equity together now exceed base salary."
                </p>
                <StackedBarChart
                    title="Total compensation mix by company revenue"
                    summary_intro="Stacked bars of median compensation components in thousands of US dollars by revenue band"
                    records=report_core::compensation_mix()
                    axis_max=USD_AXIS_MAX
                    insight="At the largest companies, $400K of the $810K median package is variable — the CISO is now paid like a growth executive, not a control function."
                />
            </Section>

            <Section id="reporting-structure" title="Reporting Structure">
                <p>
                    "Public companies are standardizing the CISO under the CIO; private "
                    "companies are twice as likely to put security directly under the CEO."
                </p>
                <ButterflyChart
                    title="Who the CISO reports to"
                    summary_intro="Diverging bars of CISO reporting lines, private versus public companies"
                    records=report_core::reporting_lines()
                    axis_max=PCT_AXIS_MAX
                    insight="The CEO reporting line is a private-company phenomenon: 24% versus 11% at public companies, where the CIO consolidates at 46%."
                />
                <LollipopChart
                    title="How often the board hears from security"
                    summary_intro="Paired dots comparing board reporting cadence at private and public companies"
                    records=report_core::board_reporting()
                    axis_max=PCT_AXIS_MAX
                    insight="Quarterly board reporting is near-universal governance hygiene at public companies — 63% against 39% private, a 24-point gap."
                />
            </Section>

            <Section id="team-dynamics" title="Team Dynamics">
                <p>
                    "Head-count expectations tilt up: mid-sized teams hold steady while the "
                    "51\u{2013}200 band absorbs most of the planned growth."
                </p>
                <GroupedBarChart
                    title="Security team size, today vs. next year"
                    summary_intro="Grouped bars of security team sizes today and expected next year"
                    records=report_core::team_size_shift()
                    axis_max=PCT_AXIS_MAX
                    insight="The 51-to-200-person security organization is the growth story: 19% of teams today, 23% expected within a year."
                />
            </Section>

            <Section id="functional-responsibilities" title="Functional Responsibilities">
                <p>
                    "Core operational ownership is settled; the frontier is AI governance, "
                    "which EMEA CISOs are slightly more likely to own than their North "
                    "American peers."
                </p>
                <GroupedBarChart
                    title="Functions owned by the security organization"
                    summary_intro="Grouped bars of functional ownership rates in North America and EMEA"
                    records=report_core::functional_responsibilities()
                    axis_max=PCT_AXIS_MAX
                    show_gap=true
                    insight="AI governance is the only function where EMEA leads North America — 52% versus 47% — a gap respondents attribute to earlier regulatory pressure."
                />
            </Section>

            <Section id="ai-governance" title="AI Governance">
                <p>
                    "Formal AI-governance programs went from rare to normal in four survey "
                    "cycles, but maturity lags adoption badly: most programs self-assess at "
                    "the two lowest levels."
                </p>
                <SlopeChart
                    title="Formal AI-governance program adoption"
                    summary_intro="Line chart of the share of organizations with a formal AI governance program by survey year"
                    records=report_core::governance_adoption()
                    axis_max=70.0
                    insight="Adoption quadrupled in three years, from 14% in 2022 to 58% in 2025 — the fastest program build-out we have measured for any governance domain."
                />
                <DonutChart
                    title="Self-assessed AI-governance maturity"
                    summary_intro="Donut chart of AI governance maturity levels"
                    records=report_core::maturity_distribution()
                    center_label="Maturity"
                    insight="Over half of programs sit at the two lowest maturity levels; only 5% call themselves optimized."
                />
                <GroupedBarChart
                    title="Who leads AI security"
                    summary_intro="Grouped bars of AI security leadership models at private and public companies"
                    records=report_core::ai_leadership()
                    axis_max=PCT_AXIS_MAX
                    show_gap=true
                    insight="Dedicated AI-security leadership remains rare everywhere, but public companies are more than twice as likely to have it: 13% versus 6%."
                />
            </Section>

            <Section id="threat-landscape" title="Threat Landscape">
                <p>
                    "Asked to name the single threat that most shapes their 2026 program, "
                    "CISOs put supply-chain exposure far ahead of everything else — and "
                    "AI-enhanced attacks have leapt to second in a single year."
                </p>
                <TreemapChart
                    title="Top threat priorities for 2026"
                    summary_intro="Treemap of top threat priorities"
                    records=report_core::threat_priorities()
                    insight="Third-party risk at 43% commands nearly twice the mindshare of AI-enhanced attacks at 22% — and ransomware, at 7%, has fallen out of the top tier entirely."
                />
            </Section>

            <Section id="nextgen-leaders" title="Next-Gen Leaders">
                <p>
                    "Deputy and rising security leaders told us what would move them: "
                    "ownership economics and board exposure outrank brand."
                </p>
                <GroupedBarChart
                    title="What next-generation leaders weigh in an offer"
                    summary_intro="Bars of the factors next generation security leaders cite as decisive in an offer"
                    records=report_core::nextgen_priorities()
                    axis_max=PCT_AXIS_MAX
                    insight="Equity upside (58%) and board access (52%) beat company brand (21%) decisively — the next generation is pricing influence, not logos."
                />
            </Section>

            <Section id="international" title="International">
                <p>
                    "The compensation gap between regions remains wide even after "
                    "adjusting for company size mix."
                </p>
                <GroupedBarChart
                    title="Median total compensation by region"
                    summary_intro="Bars of median total compensation in thousands of US dollars by region"
                    records=report_core::international_compensation()
                    axis_max=USD_AXIS_MAX
                    insight="North American CISOs out-earn their EMEA peers by roughly $147K at the median, and the gap to Latin America approaches 2x."
                />
            </Section>

            <Section id="recommendations" title="Recommendations">
                <ol class="recommendations">
                    <li>
                        <strong>"Reprice the role before the market does."</strong>
                        " Benchmark against the variable-heavy public-company package, not "
                        "last year's base salary."
                    </li>
                    <li>
                        <strong>"Put AI governance under a named owner."</strong>
                        " 27% of private companies still have nobody accountable for AI "
                        "security outcomes."
                    </li>
                    <li>
                        <strong>"Move board reporting to quarterly."</strong>
                        " It is already the public-company norm; private boards that hear "
                        "from security only after incidents are pricing in surprise."
                    </li>
                    <li>
                        <strong>"Recruit next-gen leaders on influence."</strong>
                        " Equity and board access move candidates; brand does not."
                    </li>
                </ol>
            </Section>
        </main>
        <footer class="footer">
            <p>"CISO Pulse 2026. Survey fielded October 2025 \u{2013} January 2026."</p>
        </footer>
    }
}

#[component]
fn NavBar(active: ReadSignal<usize>) -> impl IntoView {
    view! {
        <nav class="topnav" aria-label="Report sections">
            <span class="brand">"CISO Pulse"</span>
            <div class="nav-links">
                {SECTIONS
                    .iter()
                    .enumerate()
                    .map(|(i, (id, label))| {
                        view! {
                            <a
                                href=format!("#{id}")
                                class="nav-link"
                                class:active=move || active.get() == i
                                aria-current=move || {
                                    if active.get() == i { Some("true") } else { None }
                                }
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

#[component]
fn Section(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section id=id class="report-section">
            <h2>{title}</h2>
            {children()}
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
