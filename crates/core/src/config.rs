//! Property-name configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into the derived page accessors (title, slug, keywords). Library code never reads
//! environment variables itself; the binary resolves raw values and hands them to
//! [`PageConfig::from_env_values`].

use crate::constants::{DEFAULT_KEYWORDS_PROPERTY, DEFAULT_SLUG_PROPERTY, DEFAULT_TITLE_PROPERTIES};
use crate::{PageError, PageResult};
use pagekit_types::NonEmptyText;

/// Property names resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    title_properties: Vec<String>,
    slug_property: String,
    keywords_property: String,
}

impl PageConfig {
    /// Create a new `PageConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidInput`] if `title_properties` is empty.
    pub fn new(
        title_properties: Vec<NonEmptyText>,
        slug_property: NonEmptyText,
        keywords_property: NonEmptyText,
    ) -> PageResult<Self> {
        if title_properties.is_empty() {
            return Err(PageError::InvalidInput(
                "at least one title property is required".into(),
            ));
        }

        Ok(Self {
            title_properties: title_properties
                .into_iter()
                .map(|name| name.as_str().to_owned())
                .collect(),
            slug_property: slug_property.as_str().to_owned(),
            keywords_property: keywords_property.as_str().to_owned(),
        })
    }

    /// Build a config from optional raw values, falling back to the defaults.
    ///
    /// `title_properties` is a comma-separated list. `None`, empty or whitespace-only values
    /// select the default for that field.
    pub fn from_env_values(
        title_properties: Option<String>,
        slug_property: Option<String>,
        keywords_property: Option<String>,
    ) -> PageResult<Self> {
        let title_properties = title_properties
            .map(|raw| NonEmptyText::split_list(&raw))
            .filter(|names| !names.is_empty())
            .map(Ok)
            .unwrap_or_else(|| {
                DEFAULT_TITLE_PROPERTIES
                    .iter()
                    .map(|name| NonEmptyText::new(name))
                    .collect::<Result<Vec<_>, _>>()
            })
            .map_err(|e| PageError::InvalidInput(e.to_string()))?;
        let slug_property = name_or(slug_property, DEFAULT_SLUG_PROPERTY)?;
        let keywords_property = name_or(keywords_property, DEFAULT_KEYWORDS_PROPERTY)?;

        Self::new(title_properties, slug_property, keywords_property)
    }

    pub fn title_properties(&self) -> &[String] {
        &self.title_properties
    }

    pub fn slug_property(&self) -> &str {
        &self.slug_property
    }

    pub fn keywords_property(&self) -> &str {
        &self.keywords_property
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title_properties: DEFAULT_TITLE_PROPERTIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            slug_property: DEFAULT_SLUG_PROPERTY.to_string(),
            keywords_property: DEFAULT_KEYWORDS_PROPERTY.to_string(),
        }
    }
}

fn name_or(value: Option<String>, fallback: &str) -> PageResult<NonEmptyText> {
    match value.and_then(|raw| NonEmptyText::new(raw).ok()) {
        Some(name) => Ok(name),
        None => NonEmptyText::new(fallback).map_err(|e| PageError::InvalidInput(e.to_string())),
    }
}
