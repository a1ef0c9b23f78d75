//! Request extractors that guard handlers.
//!
//! - [`auth::AuthOrg`] -- Resolves the caller's organization from a JWT Bearer token.

pub mod auth;
