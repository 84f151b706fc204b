//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The analysis schema is absent-tolerant on purpose: the backend omits
//! any section it could not compute, and older backends lack the
//! blueprint map entirely. Every field is therefore optional and the
//! whole object deserializes from `{}`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A value the backend may emit as either a JSON string or a number.
///
/// Rendered verbatim: no currency symbols, thousands separators, or
/// rounding are applied on the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Result of `POST /analyze`: the generated construction plan.
///
/// Replaced wholesale in [`crate::state::plan::PlanState`] on every
/// successful analyze call; never merged field-by-field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Human-readable schedule summary (e.g. `"30 days"`).
    pub timeline: Option<Scalar>,
    /// Total cost estimate.
    pub estimated_budget: Option<Scalar>,
    /// Estimated worker count.
    pub workers: Option<Scalar>,
    /// Unit cost per square yard.
    pub cost_per_yard: Option<Scalar>,
    /// Per-week task lines, in schedule order.
    pub weekly_plan: Option<Vec<String>>,
    /// Per-month task lines, in schedule order.
    pub monthly_plan: Option<Vec<String>>,
    /// Cost split across the four fixed categories.
    pub budget_breakdown: Option<BudgetBreakdown>,
    /// Workforce composition lines.
    pub workers_breakdown: Option<Vec<String>>,
    /// Material lines.
    pub materials: Option<Vec<String>>,
    /// Assistant-generated planning notes.
    pub assumptions: Option<Vec<String>>,
    /// Floor name -> relative image path (newer backends only).
    pub blueprints: Option<BTreeMap<String, String>>,
}

/// The four fixed cost categories of the budget view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetBreakdown {
    pub materials: Option<Scalar>,
    pub labor: Option<Scalar>,
    pub machinery: Option<Scalar>,
    pub approvals: Option<Scalar>,
}

/// Request body for `POST /chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body of `POST /chat`. A missing `reply` reads as empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatReply {
    pub reply: String,
}
