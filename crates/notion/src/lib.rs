//! Notion wire/boundary support for page properties.
//!
//! This crate provides **wire models** and **decoding helpers** for the `properties` map of a
//! page object returned by the Notion API:
//! - a closed [`PropertyValue`] sum type with one variant per consumed kind
//! - strict decoding of a single property, reporting the failing field path
//! - lenient decoding of a whole `properties` map, degrading property-by-property
//!
//! Retrieval over HTTP is not part of this crate; callers hand it already-fetched JSON.

pub mod page;
pub mod property;

// Re-export public types
pub use page::{decode_properties, parent_type, parse_page_json, PropertyMap};
pub use property::{DateRange, PropertyKind, PropertyValue, TextRun};

/// Errors returned by the `notion` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`NotionError`].
pub type NotionResult<T> = Result<T, NotionError>;
