//! Constants used throughout the pagekit core crate.
//!
//! Property names follow the conventions of documentation sites built from Notion
//! databases: the built-in `title` column, a user-created `Name` column, and optional `Slug`
//! and `Keywords` text columns.

/// Title property names tried in order when resolving a page title.
pub const DEFAULT_TITLE_PROPERTIES: [&str; 2] = ["title", "Name"];

/// Property holding an explicit URL slug.
pub const DEFAULT_SLUG_PROPERTY: &str = "Slug";

/// Property holding comma-separated keywords.
pub const DEFAULT_KEYWORDS_PROPERTY: &str = "Keywords";

/// `parent.type` tag of pages that are rows of a database.
pub const DATABASE_PARENT_TYPE: &str = "database_id";
