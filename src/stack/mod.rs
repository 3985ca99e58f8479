//! Stack report building
//!
//! - [`loader`] - generic continuation-token pagination
//! - [`mapper`] - summary to report-field projection, including detail fetches
//! - [`record`] - output record shape and completeness validation

#[cfg(test)]
pub(crate) mod fake;
pub mod loader;
pub mod mapper;
pub mod record;

pub use loader::{load_items, load_pages};
pub use mapper::{format_creation_time, map_summary};
pub use record::{Detail, MappedStack, ParameterList, StackRecord, DELETED, FIELD_KEYS};
