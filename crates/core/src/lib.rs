//! Shared domain primitives for the orgbot workspace.
//!
//! - [`types`] -- primary key and timestamp aliases.
//! - [`error`] -- the domain error taxonomy surfaced by every crate.
//! - [`analytics`] -- data shapes exchanged with the analytics dashboard.

pub mod analytics;
pub mod error;
pub mod types;
