//! Page identifier parsing and normalisation.
//!
//! The content API hands out page identifiers in more than one spelling: hyphenated UUIDs in
//! API responses, 32-character hex strings in share links, and page URLs whose last path
//! segment ends with the identifier.
//!
//! To compare identifiers reliably, pagekit uses a *canonical* representation:
//! **32 lowercase hexadecimal characters** (no hyphens).
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `6e6921b9b1f54614ab3cbf1a73358a1f`

mod id;

pub use id::PageId;

/// Error type for page identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum PageIdError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for page identifier operations.
pub type PageIdResult<T> = Result<T, PageIdError>;
