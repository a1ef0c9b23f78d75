//! Row models.

pub mod meta_app_details;
pub mod organization;
