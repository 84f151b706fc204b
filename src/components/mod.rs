//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the planner chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod analysis_form;
pub mod chat_widget;
pub mod download_button;
pub mod filter_bar;
pub mod results_panel;
pub mod summary_cards;
