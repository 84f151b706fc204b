//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`plan`, `chat`, `ui`) so individual
//! components can depend on small focused models. Each struct lives in
//! one `RwSignal` provided via context by the root `App` component.

pub mod chat;
pub mod plan;
pub mod ui;
