use super::*;
use serde_json::json;

fn result(value: serde_json::Value) -> AnalysisResult {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn plan_state_starts_empty_with_no_active_view() {
    let state = PlanState::default();
    assert!(!state.has_result());
    assert_eq!(state.active_view, None);
}

#[test]
fn empty_state_summary_is_all_placeholders() {
    let summary = PlanState::default().summary();
    assert_eq!(summary.timeline, SUMMARY_PLACEHOLDER);
    assert_eq!(summary.estimated_budget, SUMMARY_PLACEHOLDER);
    assert_eq!(summary.workers, SUMMARY_PLACEHOLDER);
    assert_eq!(summary.cost_per_yard, SUMMARY_PLACEHOLDER);
}

// =============================================================
// Wholesale replacement
// =============================================================

#[test]
fn replace_stores_the_result() {
    let mut state = PlanState::default();
    state.replace(result(json!({"timeline": "30 days"})));
    assert!(state.has_result());
    assert_eq!(state.summary().timeline, "30 days");
}

#[test]
fn replace_overwrites_rather_than_merges() {
    let mut state = PlanState::default();
    state.replace(result(json!({"timeline": "30 days", "workers": 12})));
    // The second response omits `workers`; the old value must not
    // survive.
    state.replace(result(json!({"timeline": "45 days"})));

    let summary = state.summary();
    assert_eq!(summary.timeline, "45 days");
    assert_eq!(summary.workers, SUMMARY_PLACEHOLDER);
}

#[test]
fn replace_keeps_the_active_view_selection() {
    let mut state = PlanState {
        active_view: Some(crate::util::views::PlanView::Budget),
        ..PlanState::default()
    };
    state.replace(result(json!({})));
    assert_eq!(state.active_view, Some(crate::util::views::PlanView::Budget));
}

// =============================================================
// Summary formatting
// =============================================================

#[test]
fn summary_renders_numbers_and_strings_verbatim() {
    let mut state = PlanState::default();
    state.replace(result(json!({
        "estimatedBudget": "$50,000",
        "workers": 18,
        "costPerYard": "$85"
    })));
    let summary = state.summary();
    assert_eq!(summary.estimated_budget, "$50,000");
    assert_eq!(summary.workers, "18");
    assert_eq!(summary.cost_per_yard, "$85");
}
