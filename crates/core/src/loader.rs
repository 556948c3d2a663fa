//! Loading page objects from disk.
//!
//! Inspection tooling works on page JSON saved from the API. The page id is taken from the
//! object's `id` field unless the caller overrides it.

use crate::page::{PageArgs, PageRecord};
use crate::{PageError, PageResult};
use serde_json::Value;
use std::path::Path;

/// Caller-assigned placement of a page within the site outline.
#[derive(Clone, Debug, Default)]
pub struct Placement {
    pub layout_context: String,
    pub order: i64,
    pub found_directly_in_outline: bool,
    /// Overrides the page object's own `id`.
    pub page_id: Option<String>,
}

/// Read a page object from a JSON file and wrap it in a [`PageRecord`].
///
/// # Errors
///
/// Returns:
/// - [`PageError::FileRead`] if the file cannot be read,
/// - [`PageError::Notion`] if the contents are not a JSON object,
/// - [`PageError::InvalidInput`] if no page id is given and the object has no string `id`.
pub fn read_page_file(path: &Path, placement: Placement) -> PageResult<PageRecord> {
    let text = std::fs::read_to_string(path).map_err(PageError::FileRead)?;
    let metadata = notion::parse_page_json(&text)?;

    let page_id = match placement.page_id {
        Some(id) => id,
        None => metadata
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                PageError::InvalidInput(format!(
                    "{} has no string 'id' field; pass a page id explicitly",
                    path.display()
                ))
            })?,
    };

    tracing::info!("loaded page {} from {}", page_id, path.display());

    Ok(PageRecord::new(PageArgs {
        layout_context: placement.layout_context,
        page_id,
        order: placement.order,
        metadata,
        found_directly_in_outline: placement.found_directly_in_outline,
    }))
}
