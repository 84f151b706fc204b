//! View dispatch and the pure render model for the results panel.
//!
//! DESIGN
//! ======
//! The filter bar carries string view keys; dispatch turns them into an
//! exhaustive enum with an explicit `Unknown` request so the "No data"
//! fallback is a deliberate case, not a missed lookup. `view_content`
//! is a pure function over the stored result, which keeps every
//! rendering rule unit-testable without a browser.

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;

use crate::net::types::{AnalysisResult, Scalar};
use crate::util::form_schema::FormVariant;

/// Message shown when a view is requested before any analysis ran.
pub const NO_PLAN_MESSAGE: &str = "Please generate a plan first.";
/// Fallback for unknown keys and views whose backing field is absent.
pub const NO_DATA_MESSAGE: &str = "No data";

/// Bullet glyph for the paragraph-list views.
pub const BULLET_PREFIX: &str = "\u{2022}";
/// Check glyph for the assumptions view.
pub const CHECK_PREFIX: &str = "\u{2714}";

/// The fixed set of result views selectable from the filter bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanView {
    Weekly,
    Monthly,
    Budget,
    Workers,
    Materials,
    Assumptions,
    Blueprint,
}

impl PlanView {
    /// Stable key carried on the filter button (`data-view` contract).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Budget => "budget",
            Self::Workers => "workers",
            Self::Materials => "materials",
            Self::Assumptions => "assumptions",
            Self::Blueprint => "blueprint",
        }
    }

    /// Heading shown above the rendered view.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly Plan",
            Self::Monthly => "Monthly Plan",
            Self::Budget => "Cost Breakdown",
            Self::Workers => "Workforce",
            Self::Materials => "Materials",
            Self::Assumptions => "AI Notes",
            Self::Blueprint => "Floor Blueprints",
        }
    }

    /// Views offered by the filter bar for a given form variant.
    pub fn for_variant(variant: FormVariant) -> &'static [Self] {
        const STANDARD: &[PlanView] = &[
            PlanView::Weekly,
            PlanView::Monthly,
            PlanView::Budget,
            PlanView::Workers,
            PlanView::Materials,
            PlanView::Assumptions,
        ];
        const EXTENDED: &[PlanView] = &[
            PlanView::Weekly,
            PlanView::Monthly,
            PlanView::Budget,
            PlanView::Workers,
            PlanView::Materials,
            PlanView::Assumptions,
            PlanView::Blueprint,
        ];
        if variant.has_blueprint_view() {
            EXTENDED
        } else {
            STANDARD
        }
    }
}

/// A requested view identifier, including the unrecognized case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewRequest {
    Known(PlanView),
    Unknown,
}

impl ViewRequest {
    /// Parse a view key as carried on a filter button.
    pub fn parse(key: &str) -> Self {
        match key {
            "weekly" => Self::Known(PlanView::Weekly),
            "monthly" => Self::Known(PlanView::Monthly),
            "budget" => Self::Known(PlanView::Budget),
            "workers" => Self::Known(PlanView::Workers),
            "materials" => Self::Known(PlanView::Materials),
            "assumptions" => Self::Known(PlanView::Assumptions),
            "blueprint" => Self::Known(PlanView::Blueprint),
            _ => Self::Unknown,
        }
    }
}

/// What the results panel should display, independent of markup.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewContent {
    /// No analysis has been generated yet.
    NoPlan,
    /// Unknown key, or the selected view has no backing data.
    NoData,
    /// Numbered list, one item per entry (weekly plan).
    OrderedList {
        title: &'static str,
        items: Vec<String>,
    },
    /// Glyph-prefixed paragraphs, one per entry.
    Paragraphs {
        title: &'static str,
        prefix: &'static str,
        items: Vec<String>,
    },
    /// Fixed label/value rows (budget breakdown).
    LabeledRows {
        title: &'static str,
        rows: Vec<(&'static str, String)>,
    },
    /// Per-floor heading + image URL pairs.
    Blueprints {
        title: &'static str,
        floors: Vec<(String, String)>,
    },
}

/// Resolve a blueprint path against the site root with a cache-busting
/// query parameter.
pub fn blueprint_url(path: &str, cache_bust: u64) -> String {
    format!("/{}?t={cache_bust}", path.trim_start_matches('/'))
}

/// Compute the render model for one view request.
///
/// `cache_bust` is only consulted for the blueprint view; callers pass
/// the current wall-clock milliseconds so the browser refetches floor
/// images on every render.
pub fn view_content(
    result: Option<&AnalysisResult>,
    request: ViewRequest,
    cache_bust: u64,
) -> ViewContent {
    let Some(result) = result else {
        return ViewContent::NoPlan;
    };
    let ViewRequest::Known(view) = request else {
        return ViewContent::NoData;
    };

    match view {
        PlanView::Weekly => list_view(view, result.weekly_plan.as_ref(), |title, items| {
            ViewContent::OrderedList { title, items }
        }),
        PlanView::Monthly => paragraphs(view, result.monthly_plan.as_ref(), BULLET_PREFIX),
        PlanView::Workers => paragraphs(view, result.workers_breakdown.as_ref(), BULLET_PREFIX),
        PlanView::Materials => paragraphs(view, result.materials.as_ref(), BULLET_PREFIX),
        PlanView::Assumptions => paragraphs(view, result.assumptions.as_ref(), CHECK_PREFIX),
        PlanView::Budget => match result.budget_breakdown.as_ref() {
            None => ViewContent::NoData,
            Some(b) => ViewContent::LabeledRows {
                title: view.title(),
                rows: vec![
                    ("Materials", scalar_cell(b.materials.as_ref())),
                    ("Labor", scalar_cell(b.labor.as_ref())),
                    ("Machinery", scalar_cell(b.machinery.as_ref())),
                    ("Approvals", scalar_cell(b.approvals.as_ref())),
                ],
            },
        },
        PlanView::Blueprint => match result.blueprints.as_ref() {
            None => ViewContent::NoData,
            Some(map) => ViewContent::Blueprints {
                title: view.title(),
                floors: map
                    .iter()
                    .map(|(floor, path)| (floor.clone(), blueprint_url(path, cache_bust)))
                    .collect(),
            },
        },
    }
}

fn list_view(
    view: PlanView,
    source: Option<&Vec<String>>,
    build: impl FnOnce(&'static str, Vec<String>) -> ViewContent,
) -> ViewContent {
    match source {
        None => ViewContent::NoData,
        Some(items) => build(view.title(), items.clone()),
    }
}

fn paragraphs(view: PlanView, source: Option<&Vec<String>>, prefix: &'static str) -> ViewContent {
    list_view(view, source, |title, items| ViewContent::Paragraphs {
        title,
        prefix,
        items,
    })
}

fn scalar_cell(value: Option<&Scalar>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}
