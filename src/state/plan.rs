#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use crate::net::types::{AnalysisResult, Scalar};
use crate::util::views::PlanView;

/// Single-slot store for the most recent analysis response.
///
/// The slot is replaced wholesale on every successful `/analyze` call.
/// When two submissions overlap, whichever response resolves last wins;
/// there is no merging and no cancellation of the earlier request.
#[derive(Clone, Debug, Default)]
pub struct PlanState {
    /// The last analysis result, absent until the first submission
    /// resolves.
    pub result: Option<AnalysisResult>,
    /// The view selected in the filter bar, absent until first click.
    pub active_view: Option<PlanView>,
}

/// The four headline figures shown above the results panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanSummary {
    pub timeline: String,
    pub estimated_budget: String,
    pub workers: String,
    pub cost_per_yard: String,
}

/// Placeholder shown in a summary card before any analysis ran, or for
/// a field the backend omitted.
pub const SUMMARY_PLACEHOLDER: &str = "\u{2014}";

impl PlanState {
    /// Replace the stored result wholesale. Fields absent from the new
    /// result clear any previously displayed values.
    pub fn replace(&mut self, result: AnalysisResult) {
        self.result = Some(result);
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Headline figures for the summary cards.
    pub fn summary(&self) -> PlanSummary {
        let result = self.result.as_ref();
        PlanSummary {
            timeline: summary_cell(result.and_then(|r| r.timeline.as_ref())),
            estimated_budget: summary_cell(result.and_then(|r| r.estimated_budget.as_ref())),
            workers: summary_cell(result.and_then(|r| r.workers.as_ref())),
            cost_per_yard: summary_cell(result.and_then(|r| r.cost_per_yard.as_ref())),
        }
    }
}

fn summary_cell(value: Option<&Scalar>) -> String {
    value.map_or_else(|| SUMMARY_PLACEHOLDER.to_owned(), ToString::to_string)
}
