use super::*;
use serde_json::json;

fn full_result() -> AnalysisResult {
    serde_json::from_value(json!({
        "timeline": "30 days",
        "estimatedBudget": "$50,000",
        "weeklyPlan": ["Week 1: Excavation", "Week 2: Foundation", "Week 3: Plinth"],
        "monthlyPlan": ["Month 1: Structure", "Month 2: Finishing"],
        "budgetBreakdown": {
            "materials": "$20,000",
            "labor": "$15,000",
            "machinery": "$10,000",
            "approvals": "$5,000"
        },
        "workersBreakdown": ["8 masons", "4 helpers"],
        "materials": ["Cement", "Steel", "Bricks"],
        "assumptions": ["Weather stays workable"],
        "blueprints": {"First Floor": "pdfs/first.png", "Ground Floor": "pdfs/ground.png"}
    }))
    .unwrap()
}

const ALL_KEYS: [&str; 7] = [
    "weekly",
    "monthly",
    "budget",
    "workers",
    "materials",
    "assumptions",
    "blueprint",
];

// =============================================================
// Request parsing
// =============================================================

#[test]
fn parse_recognizes_every_filter_key() {
    for key in ALL_KEYS {
        let request = ViewRequest::parse(key);
        let ViewRequest::Known(view) = request else {
            panic!("{key} should parse");
        };
        assert_eq!(view.key(), key);
    }
}

#[test]
fn parse_maps_anything_else_to_unknown() {
    assert_eq!(ViewRequest::parse("yearly"), ViewRequest::Unknown);
    assert_eq!(ViewRequest::parse(""), ViewRequest::Unknown);
    assert_eq!(ViewRequest::parse("Weekly"), ViewRequest::Unknown);
}

// =============================================================
// Missing-result precondition
// =============================================================

#[test]
fn any_request_without_a_result_yields_no_plan() {
    for key in ALL_KEYS {
        assert_eq!(
            view_content(None, ViewRequest::parse(key), 0),
            ViewContent::NoPlan
        );
    }
    assert_eq!(view_content(None, ViewRequest::Unknown, 0), ViewContent::NoPlan);
}

#[test]
fn unknown_request_with_a_result_yields_no_data() {
    let result = full_result();
    assert_eq!(
        view_content(Some(&result), ViewRequest::parse("yearly"), 0),
        ViewContent::NoData
    );
}

// =============================================================
// Per-view rendering
// =============================================================

#[test]
fn weekly_renders_one_list_item_per_entry_in_order() {
    let result = full_result();
    let content = view_content(Some(&result), ViewRequest::Known(PlanView::Weekly), 0);
    assert_eq!(
        content,
        ViewContent::OrderedList {
            title: "Weekly Plan",
            items: vec![
                "Week 1: Excavation".to_owned(),
                "Week 2: Foundation".to_owned(),
                "Week 3: Plinth".to_owned(),
            ],
        }
    );
}

#[test]
fn monthly_workers_materials_use_bullet_paragraphs() {
    let result = full_result();
    for (view, expected) in [
        (PlanView::Monthly, vec!["Month 1: Structure", "Month 2: Finishing"]),
        (PlanView::Workers, vec!["8 masons", "4 helpers"]),
        (PlanView::Materials, vec!["Cement", "Steel", "Bricks"]),
    ] {
        let content = view_content(Some(&result), ViewRequest::Known(view), 0);
        let ViewContent::Paragraphs { prefix, items, .. } = content else {
            panic!("{view:?} should render paragraphs");
        };
        assert_eq!(prefix, BULLET_PREFIX);
        assert_eq!(items, expected);
    }
}

#[test]
fn assumptions_use_check_prefix() {
    let result = full_result();
    let content = view_content(Some(&result), ViewRequest::Known(PlanView::Assumptions), 0);
    let ViewContent::Paragraphs { prefix, items, .. } = content else {
        panic!("assumptions should render paragraphs");
    };
    assert_eq!(prefix, CHECK_PREFIX);
    assert_eq!(items, vec!["Weather stays workable"]);
}

#[test]
fn budget_renders_the_four_categories_in_fixed_order() {
    let result = full_result();
    let content = view_content(Some(&result), ViewRequest::Known(PlanView::Budget), 0);
    assert_eq!(
        content,
        ViewContent::LabeledRows {
            title: "Cost Breakdown",
            rows: vec![
                ("Materials", "$20,000".to_owned()),
                ("Labor", "$15,000".to_owned()),
                ("Machinery", "$10,000".to_owned()),
                ("Approvals", "$5,000".to_owned()),
            ],
        }
    );
}

#[test]
fn budget_renders_missing_subfields_as_empty() {
    let result: AnalysisResult =
        serde_json::from_value(json!({"budgetBreakdown": {"labor": "$9,000"}})).unwrap();
    let content = view_content(Some(&result), ViewRequest::Known(PlanView::Budget), 0);
    let ViewContent::LabeledRows { rows, .. } = content else {
        panic!("budget should render rows");
    };
    assert_eq!(rows[0], ("Materials", String::new()));
    assert_eq!(rows[1], ("Labor", "$9,000".to_owned()));
}

#[test]
fn blueprint_urls_are_root_resolved_and_cache_busted() {
    let result = full_result();
    let content = view_content(Some(&result), ViewRequest::Known(PlanView::Blueprint), 1_700_000);
    let ViewContent::Blueprints { floors, .. } = content else {
        panic!("blueprint should render floors");
    };
    // BTreeMap ordering: floor names sort lexicographically.
    assert_eq!(
        floors,
        vec![
            ("First Floor".to_owned(), "/pdfs/first.png?t=1700000".to_owned()),
            ("Ground Floor".to_owned(), "/pdfs/ground.png?t=1700000".to_owned()),
        ]
    );
}

#[test]
fn blueprint_url_does_not_double_leading_slashes() {
    assert_eq!(blueprint_url("/pdfs/a.png", 7), "/pdfs/a.png?t=7");
    assert_eq!(blueprint_url("pdfs/a.png", 7), "/pdfs/a.png?t=7");
}

#[test]
fn views_with_absent_backing_fields_yield_no_data() {
    let empty = AnalysisResult::default();
    for view in [
        PlanView::Weekly,
        PlanView::Monthly,
        PlanView::Budget,
        PlanView::Workers,
        PlanView::Materials,
        PlanView::Assumptions,
        PlanView::Blueprint,
    ] {
        assert_eq!(
            view_content(Some(&empty), ViewRequest::Known(view), 0),
            ViewContent::NoData,
            "{view:?}"
        );
    }
}

#[test]
fn present_but_empty_lists_render_zero_items() {
    let result: AnalysisResult = serde_json::from_value(json!({"weeklyPlan": []})).unwrap();
    let content = view_content(Some(&result), ViewRequest::Known(PlanView::Weekly), 0);
    assert_eq!(
        content,
        ViewContent::OrderedList {
            title: "Weekly Plan",
            items: Vec::new(),
        }
    );
}

// =============================================================
// Variant view lists
// =============================================================

#[test]
fn standard_variant_omits_the_blueprint_view() {
    let views = PlanView::for_variant(crate::util::form_schema::FormVariant::Standard);
    assert_eq!(views.len(), 6);
    assert!(!views.contains(&PlanView::Blueprint));
}

#[test]
fn extended_variant_appends_the_blueprint_view() {
    let views = PlanView::for_variant(crate::util::form_schema::FormVariant::Extended);
    assert_eq!(views.len(), 7);
    assert_eq!(views.last(), Some(&PlanView::Blueprint));
}

// =============================================================
// Fallback messages
// =============================================================

#[test]
fn fallback_messages_are_exact() {
    assert_eq!(NO_PLAN_MESSAGE, "Please generate a plan first.");
    assert_eq!(NO_DATA_MESSAGE, "No data");
}
