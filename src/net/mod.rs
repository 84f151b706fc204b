//! Networking modules for the three backend HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls (analyze, PDF download, chat) and
//! `types` defines the shared wire schema for their bodies.

pub mod api;
pub mod types;
