use crate::{PageIdError, PageIdResult};
use std::fmt;
use uuid::Uuid;

/// A page identifier in canonical form (32 lowercase hex characters, no hyphens).
///
/// Once constructed, the contained identifier is guaranteed to be valid, so two `PageId`
/// values compare equal exactly when they name the same page, whatever spelling they were
/// parsed from.
///
/// # Construction
/// - [`PageId::parse`] accepts a bare identifier (hyphenated or simple, any case).
/// - [`PageId::from_link`] also accepts a page URL or slug whose last segment ends with the
///   identifier, e.g. `https://www.notion.so/Site-docs-6e6921b9b1f54614ab3cbf1a73358a1f?v=1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageId(Uuid);

impl PageId {
    /// Parses a bare page identifier.
    ///
    /// Accepts the hyphenated (`8-4-4-4-12`) and simple (32 hex) forms, in either case.
    ///
    /// # Errors
    ///
    /// Returns [`PageIdError::InvalidInput`] if `input` is neither form.
    pub fn parse(input: &str) -> PageIdResult<Self> {
        let trimmed = input.trim();
        let well_formed = match trimmed.len() {
            32 => trimmed.bytes().all(|b| b.is_ascii_hexdigit()),
            36 => trimmed
                .bytes()
                .enumerate()
                .all(|(i, b)| match i {
                    8 | 13 | 18 | 23 => b == b'-',
                    _ => b.is_ascii_hexdigit(),
                }),
            _ => false,
        };

        if !well_formed {
            return Err(PageIdError::InvalidInput(format!(
                "page id must be 32 hex characters, optionally hyphenated, got: '{}'",
                input
            )));
        }

        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|e| PageIdError::InvalidInput(format!("'{}': {}", input, e)))
    }

    /// Parses a page identifier out of a link, URL or bare identifier.
    ///
    /// Query strings and fragments are ignored. The identifier is taken from the last path
    /// segment: either the whole segment, or its trailing 32 characters when the segment is a
    /// title slug such as `Getting-Started-<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`PageIdError::InvalidInput`] if no identifier can be found.
    pub fn from_link(link: &str) -> PageIdResult<Self> {
        let without_suffix = link
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let segment = without_suffix.rsplit('/').next().unwrap_or_default();

        if let Ok(id) = Self::parse(segment) {
            return Ok(id);
        }

        let tail_start = segment.len().saturating_sub(32);
        match segment.get(tail_start..) {
            Some(tail) if tail.len() == 32 => Self::parse(tail),
            _ => Err(PageIdError::InvalidInput(format!(
                "no page id found in link: '{}'",
                link
            ))),
        }
    }
}

impl fmt::Display for PageId {
    /// Formats the identifier in canonical form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}
