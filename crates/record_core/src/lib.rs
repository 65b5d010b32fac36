//! Shared historical record domain primitives.
//!
//! This crate owns the record entity, its narrative template and the
//! request/response contracts of the recorder and lister handlers. It
//! intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod contract;
pub mod record;
