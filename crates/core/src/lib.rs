//! # pagekit core
//!
//! Page records and typed property access for document generation.
//!
//! This crate turns raw page objects from the Notion API into [`PageRecord`]s whose
//! accessors always yield plain scalars:
//! - text, number, checkbox and date accessors with caller defaults
//! - derived values (title, slug, keywords) driven by [`PageConfig`]
//! - loading page JSON files for inspection tooling
//!
//! **No transport concerns**: fetching pages over HTTP and writing rendered documents belong to
//! the surrounding pipeline.

pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod page;

pub use config::PageConfig;
pub use error::{PageError, PageResult};
pub use loader::{read_page_file, Placement};
pub use page::{PageArgs, PageRecord, PageType};

// Re-export the property model so callers need only this crate.
pub use notion::{PropertyKind, PropertyValue};
