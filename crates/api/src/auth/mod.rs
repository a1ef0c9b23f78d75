//! Authentication primitives.
//!
//! - [`jwt`] -- organization-scoped JWT issuing and validation.

pub mod jwt;
