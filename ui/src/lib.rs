pub mod app;
pub mod charts;
pub mod reveal;
pub mod theme;

pub use app::App;

#[cfg(all(any(feature = "csr", feature = "hydrate"), target_arch = "wasm32"))]
use leptos::*;
#[cfg(all(any(feature = "csr", feature = "hydrate"), target_arch = "wasm32"))]
use wasm_bindgen::prelude::*;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <App/> });
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <App/> });
}

/// Dataset behind a named chart as JSON, for embedding partners and
/// console debugging.
#[cfg(all(any(feature = "csr", feature = "hydrate"), target_arch = "wasm32"))]
#[wasm_bindgen]
pub fn chart_records_json(name: &str) -> Result<String, JsValue> {
    let records = match name {
        "threat-priorities" => report_core::threat_priorities(),
        "ai-leadership" => report_core::ai_leadership(),
        "board-reporting" => report_core::board_reporting(),
        "reporting-lines" => report_core::reporting_lines(),
        "compensation-mix" => report_core::compensation_mix(),
        "international-compensation" => report_core::international_compensation(),
        "governance-adoption" => report_core::governance_adoption(),
        "maturity-distribution" => report_core::maturity_distribution(),
        "team-size-shift" => report_core::team_size_shift(),
        "functional-responsibilities" => report_core::functional_responsibilities(),
        "nextgen-priorities" => report_core::nextgen_priorities(),
        _ => return Err(JsValue::from_str("unknown chart")),
    };
    serde_json::to_string(&records).map_err(|e| JsValue::from_str(&e.to_string()))
}
