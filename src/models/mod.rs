//! Data models for vacancy statistics.
//!
//! This module defines the value types used throughout the crate:
//!
//! - [`StatField`] - The closed set of selectable statistic fields
//! - [`StatKey`] - A histogram key, plain string or composite recruiter identity
//! - [`RecruiterKey`] - Composite `(first name, last name, company name)` identity
//!
//! Vacancy records themselves are never materialized; they exist only as
//! transient extractor state while a shard's token stream is consumed.

pub mod field;
pub mod key;

pub use field::{ALLOWED_FIELDS, StatField};
pub use key::{RecruiterKey, StatKey};
