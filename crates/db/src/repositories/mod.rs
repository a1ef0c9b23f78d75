//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Methods that take a generic executor run equally against a `&PgPool` or
//! inside an open transaction (`&mut *tx`).

pub mod meta_app_details_repo;
pub mod organization_repo;

pub use meta_app_details_repo::MetaAppDetailsRepo;
pub use organization_repo::OrganizationRepo;
