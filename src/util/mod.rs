//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure
//! presentation logic from page and component code to improve reuse
//! and testability.

pub mod download;
pub mod form_schema;
pub mod preview;
pub mod views;
