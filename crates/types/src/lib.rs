//! Small validated value types shared across the pagekit workspace.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// Used for property names in configuration, where an empty name could never match a
/// property on a page. Leading and trailing whitespace is trimmed during construction.
/// Matching against page properties remains exact and case-sensitive on the trimmed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits a comma-separated list into validated entries, skipping blank segments.
    ///
    /// Returns an empty vector when every segment is blank.
    pub fn split_list(input: &str) -> Vec<Self> {
        input
            .split(',')
            .filter_map(|segment| Self::new(segment).ok())
            .collect()
    }
}
