//! Page records and typed property access.
//!
//! A [`PageRecord`] wraps one fetched page: its identity, where it was found, and its decoded
//! property map. Every property accessor takes a caller default and returns it whenever the
//! property is absent, stored under a different kind, or only partially set. Callers never
//! branch on the property kind themselves.

use crate::config::PageConfig;
use crate::constants::DATABASE_PARENT_TYPE;
use notion::{PropertyKind, PropertyMap, PropertyValue};
use page_id::PageId;
use serde_json::Value;

/// Construction arguments for a [`PageRecord`].
#[derive(Clone, Debug)]
pub struct PageArgs {
    /// Free-form label describing where the page was loaded from.
    pub layout_context: String,
    pub page_id: String,
    /// Position among sibling pages, assigned by the caller.
    pub order: i64,
    /// Full raw page object as returned by the API.
    pub metadata: Value,
    /// True if the page is referenced directly from the outline.
    pub found_directly_in_outline: bool,
}

/// Whether a page stands alone or is a row of a database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageType {
    Simple,
    DatabasePage,
}

/// One fetched page with read-only, default-falling-back property accessors.
#[derive(Clone, Debug)]
pub struct PageRecord {
    layout_context: String,
    page_id: String,
    order: i64,
    found_directly_in_outline: bool,
    metadata: Value,
    properties: PropertyMap,
}

impl PageRecord {
    /// Build a record from a raw page object.
    ///
    /// Nothing is validated here. A missing or malformed `properties` map, or individual
    /// properties that do not decode, only surface later as defaults from the accessors.
    pub fn new(args: PageArgs) -> Self {
        let properties = notion::decode_properties(&args.metadata);
        tracing::debug!(
            page_id = %args.page_id,
            properties = properties.len(),
            "loaded page record"
        );

        Self {
            layout_context: args.layout_context,
            page_id: args.page_id,
            order: args.order,
            found_directly_in_outline: args.found_directly_in_outline,
            metadata: args.metadata,
            properties,
        }
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn order(&self) -> i64 {
        self.order
    }

    pub fn layout_context(&self) -> &str {
        &self.layout_context
    }

    pub fn found_directly_in_outline(&self) -> bool {
        self.found_directly_in_outline
    }

    /// The raw page object this record was built from.
    pub fn metadata(&self) -> &Value {
        &self.metadata
    }

    /// Look up a decoded property by exact name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Property names, sorted.
    pub fn property_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.properties.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Text of a `title` or `rich_text` property, runs concatenated in order.
    ///
    /// A text property with no runs yields an empty string, not `default`.
    pub fn plain_text_property(&self, name: &str, default: &str) -> String {
        let found = self.property(name);
        match found.and_then(PropertyValue::text_runs) {
            Some(runs) => runs.iter().map(|run| run.plain_text.as_str()).collect(),
            None => self.fallback(name, found, "text", default.to_string()),
        }
    }

    /// Value of a `number` property, or `default` if absent, unset or of another kind.
    pub fn number_property(&self, name: &str, default: f64) -> f64 {
        match self.property(name) {
            Some(PropertyValue::Number(Some(number))) => *number,
            other => self.fallback(name, other, PropertyKind::Number.as_str(), default),
        }
    }

    /// Value of a `checkbox` property, or `default` if absent or of another kind.
    pub fn checkbox_property(&self, name: &str, default: bool) -> bool {
        match self.property(name) {
            Some(PropertyValue::Checkbox(checked)) => *checked,
            other => self.fallback(name, other, PropertyKind::Checkbox.as_str(), default),
        }
    }

    /// Start (`use_start`) or end of a `date` property.
    ///
    /// Returns `default` if the property is absent, of another kind, has no date set, or
    /// lacks the requested bound. An open-ended range therefore reports `default` as its end.
    pub fn date_property(&self, name: &str, default: &str, use_start: bool) -> String {
        let bound = match self.property(name) {
            Some(PropertyValue::Date(Some(range))) if use_start => range.start.as_deref(),
            Some(PropertyValue::Date(Some(range))) => range.end.as_deref(),
            Some(PropertyValue::Date(None)) => None,
            other => {
                return self.fallback(
                    name,
                    other,
                    PropertyKind::Date.as_str(),
                    default.to_string(),
                )
            }
        };

        bound
            .filter(|value| !value.is_empty())
            .unwrap_or(default)
            .to_string()
    }

    /// Start of a `date` property; shorthand for `date_property(name, default, true)`.
    pub fn date_property_start(&self, name: &str, default: &str) -> String {
        self.date_property(name, default, true)
    }

    /// True if `link` names this page, in any id spelling or as a page URL.
    pub fn matches_link_id(&self, link: &str) -> bool {
        match (PageId::from_link(link), PageId::parse(&self.page_id)) {
            (Ok(linked), Ok(own)) => linked == own,
            _ => false,
        }
    }

    pub fn page_type(&self) -> PageType {
        match notion::parent_type(&self.metadata) {
            Some(DATABASE_PARENT_TYPE) => PageType::DatabasePage,
            _ => PageType::Simple,
        }
    }

    /// First non-empty configured title property, or an empty string.
    pub fn title(&self, config: &PageConfig) -> String {
        config
            .title_properties()
            .iter()
            .map(|name| self.plain_text_property(name, ""))
            .find(|title| !title.is_empty())
            .unwrap_or_default()
    }

    /// Slug set explicitly on the page, if any.
    pub fn explicit_slug(&self, config: &PageConfig) -> Option<String> {
        let slug = self.plain_text_property(config.slug_property(), "");
        let slug = slug.trim();
        (!slug.is_empty()).then(|| slug.to_string())
    }

    pub fn has_explicit_slug(&self, config: &PageConfig) -> bool {
        self.explicit_slug(config).is_some()
    }

    /// Explicit slug, or `/<page id>` when none is set.
    pub fn slug(&self, config: &PageConfig) -> String {
        self.explicit_slug(config)
            .unwrap_or_else(|| format!("/{}", self.page_id))
    }

    pub fn keywords(&self, config: &PageConfig) -> Option<String> {
        let keywords = self.plain_text_property(config.keywords_property(), "");
        (!keywords.trim().is_empty()).then_some(keywords)
    }

    fn fallback<T>(
        &self,
        name: &str,
        found: Option<&PropertyValue>,
        wanted: &str,
        default: T,
    ) -> T {
        if let Some(value) = found {
            tracing::debug!(
                page_id = %self.page_id,
                property = name,
                wanted,
                found = value.kind_name(),
                "property kind mismatch; using default"
            );
        }
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PAGE_ID: &str = "6e6921b9-b1f5-4614-ab3c-bf1a73358a1f";

    fn mock_metadata() -> Value {
        json!({
            "object": "page",
            "id": PAGE_ID,
            "created_time": "2023-04-11T10:17:00.000Z",
            "last_edited_time": "2023-04-13T20:24:00.000Z",
            "created_by": { "object": "user", "id": "USERID" },
            "last_edited_by": { "object": "user", "id": "USERID" },
            "cover": null,
            "icon": {
                "type": "file",
                "file": { "url": "https:/dummy_URL", "expiry_time": "2023-04-15T11:50:20.461Z" }
            },
            "parent": { "type": "workspace", "workspace": true },
            "archived": false,
            "properties": {
                "title": {
                    "id": "title",
                    "type": "title",
                    "title": [
                        {
                            "type": "text",
                            "text": { "content": "Foo", "link": null },
                            "annotations": {
                                "bold": false, "italic": false, "strikethrough": false,
                                "underline": false, "code": false, "color": "default"
                            },
                            "plain_text": "Foo",
                            "href": null
                        },
                        {
                            "type": "text",
                            "text": { "content": "Bar", "link": null },
                            "annotations": {
                                "bold": false, "italic": false, "strikethrough": false,
                                "underline": false, "code": false, "color": "default"
                            },
                            "plain_text": "Bar",
                            "href": null
                        }
                    ]
                },
                "date_property": {
                    "id": "a%3Cql",
                    "type": "date",
                    "date": { "start": "2021-10-24", "end": "2021-10-28", "time_zone": null }
                },
                "open_date": {
                    "id": "b",
                    "type": "date",
                    "date": { "start": "2021-11-01", "end": null, "time_zone": null }
                },
                "empty_date": { "id": "c", "type": "date", "date": null },
                "number_property": { "id": "WPj%5E", "type": "number", "number": 42 },
                "unset_number": { "id": "n", "type": "number", "number": null },
                "checkbox_property": { "id": "xyz123", "type": "checkbox", "checkbox": true },
                "empty_text": { "id": "e", "type": "rich_text", "rich_text": [] },
                "Slug": {
                    "id": "s",
                    "type": "rich_text",
                    "rich_text": [{ "type": "text", "plain_text": "/getting-started" }]
                },
                "Status": { "id": "st", "type": "select", "select": { "name": "Publish" } }
            },
            "url": "https://www.notion.so/Site-docu-notion-PAGEID"
        })
    }

    fn page_with(metadata: Value) -> PageRecord {
        PageRecord::new(PageArgs {
            layout_context: "Test Context".into(),
            page_id: "123".into(),
            order: 1,
            metadata,
            found_directly_in_outline: true,
        })
    }

    fn page() -> PageRecord {
        page_with(mock_metadata())
    }

    #[test]
    fn keeps_placement_metadata() {
        let page = page();
        assert_eq!(page.page_id(), "123");
        assert_eq!(page.order(), 1);
        assert_eq!(page.layout_context(), "Test Context");
        assert!(page.found_directly_in_outline());
        assert_eq!(page.metadata()["id"], PAGE_ID);
    }

    #[test]
    fn plain_text_concatenates_runs_in_order() {
        assert_eq!(page().plain_text_property("title", ""), "FooBar");
    }

    #[test]
    fn plain_text_of_empty_runs_is_empty_not_default() {
        assert_eq!(page().plain_text_property("empty_text", "Default Value"), "");
    }

    #[test]
    fn rich_text_keeps_empty_and_non_ascii_runs() {
        let page = page_with(json!({
            "properties": {
                "summary": {
                    "type": "rich_text",
                    "rich_text": [{ "plain_text": "a" }, { "plain_text": "" }, { "plain_text": "é" }]
                }
            }
        }));
        assert_eq!(page.plain_text_property("summary", "default"), "aé");
    }

    #[test]
    fn date_without_payload_falls_back() {
        let page = page_with(json!({ "properties": { "due": { "type": "date" } } }));
        assert_eq!(page.date_property("due", "default", true), "default");
        assert_eq!(page.date_property("due", "default", false), "default");
    }

    #[test]
    fn non_object_properties_degrade_to_defaults() {
        let page = page_with(json!({ "id": PAGE_ID, "properties": "oops" }));
        assert_eq!(page.plain_text_property("title", "def"), "def");
        assert!(!page.checkbox_property("checkbox_property", false));
    }

    #[test]
    fn plain_text_falls_back_for_missing_property() {
        assert_eq!(
            page().plain_text_property("nonexistent", "Default Value"),
            "Default Value"
        );
    }

    #[test]
    fn number_property_returns_stored_value() {
        assert_eq!(page().number_property("number_property", 0.0), 42.0);
    }

    #[test]
    fn number_property_falls_back_when_missing_or_unset() {
        let page = page();
        assert_eq!(page.number_property("nonexistent", 0.0), 0.0);
        assert_eq!(page.number_property("unset_number", 7.5), 7.5);
    }

    #[test]
    fn number_property_keeps_fractional_values() {
        let page = page_with(json!({
            "properties": { "ratio": { "type": "number", "number": 0.125 } }
        }));
        assert_eq!(page.number_property("ratio", 1.0), 0.125);
    }

    #[test]
    fn checkbox_property_returns_stored_value() {
        assert!(page().checkbox_property("checkbox_property", false));
    }

    #[test]
    fn checkbox_property_falls_back_for_missing_property() {
        assert!(!page().checkbox_property("nonexistent", false));
        assert!(page().checkbox_property("nonexistent", true));
    }

    #[test]
    fn date_property_returns_start_by_default() {
        assert_eq!(page().date_property_start("date_property", ""), "2021-10-24");
        assert_eq!(page().date_property("date_property", "", true), "2021-10-24");
    }

    #[test]
    fn date_property_returns_end_when_requested() {
        assert_eq!(page().date_property("date_property", "", false), "2021-10-28");
    }

    #[test]
    fn date_property_without_end_falls_back() {
        let page = page();
        assert_eq!(page.date_property("open_date", "no end", false), "no end");
        assert_eq!(page.date_property("open_date", "no end", true), "2021-11-01");
    }

    #[test]
    fn date_property_with_no_date_set_falls_back() {
        let page = page();
        assert_eq!(page.date_property("empty_date", "none", true), "none");
        assert_eq!(page.date_property("empty_date", "none", false), "none");
    }

    #[test]
    fn date_property_without_start_falls_back() {
        let page = page_with(json!({
            "properties": { "d": { "type": "date", "date": { "end": "2021-10-28" } } }
        }));
        assert_eq!(page.date_property("d", "unknown", true), "unknown");
        assert_eq!(page.date_property("d", "unknown", false), "2021-10-28");
    }

    #[test]
    fn date_property_falls_back_for_missing_property() {
        assert_eq!(page().date_property("nonexistent", "Default Value", true), "Default Value");
    }

    #[test]
    fn absent_property_returns_default_for_every_accessor() {
        let page = page();
        assert_eq!(page.plain_text_property("missing", "d"), "d");
        assert_eq!(page.number_property("missing", -3.0), -3.0);
        assert!(page.checkbox_property("missing", true));
        assert_eq!(page.date_property("missing", "d", true), "d");
        assert_eq!(page.date_property("missing", "d", false), "d");
    }

    #[test]
    fn kind_mismatch_returns_default_never_raw_value() {
        let page = page();
        assert_eq!(page.number_property("checkbox_property", 0.0), 0.0);
        assert!(!page.checkbox_property("number_property", false));
        assert_eq!(page.plain_text_property("number_property", "n/a"), "n/a");
        assert_eq!(page.plain_text_property("date_property", "n/a"), "n/a");
        assert_eq!(page.date_property("title", "n/a", true), "n/a");
        assert_eq!(page.plain_text_property("Status", "n/a"), "n/a");
    }

    #[test]
    fn property_lookup_is_case_sensitive() {
        let page = page();
        assert_eq!(page.plain_text_property("Title", "default"), "default");
        assert_eq!(page.plain_text_property("slug", "default"), "default");
    }

    #[test]
    fn accessors_are_repeatable() {
        let page = page();
        let first = (
            page.plain_text_property("title", ""),
            page.number_property("number_property", 0.0),
            page.checkbox_property("checkbox_property", false),
            page.date_property("date_property", "", false),
        );
        let second = (
            page.plain_text_property("title", ""),
            page.number_property("number_property", 0.0),
            page.checkbox_property("checkbox_property", false),
            page.date_property("date_property", "", false),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn missing_properties_map_degrades_to_defaults() {
        let page = page_with(json!({ "id": PAGE_ID, "object": "page" }));
        assert!(page.property_names().is_empty());
        assert_eq!(page.plain_text_property("title", "untitled"), "untitled");
        assert_eq!(page.number_property("number_property", 1.0), 1.0);
    }

    #[test]
    fn malformed_property_only_affects_its_own_lookup() {
        let page = page_with(json!({
            "properties": {
                "done": { "type": "checkbox", "checkbox": "yes" },
                "count": { "type": "number", "number": 3 }
            }
        }));
        assert!(!page.checkbox_property("done", false));
        assert_eq!(page.number_property("count", 0.0), 3.0);
    }

    #[test]
    fn property_names_are_sorted() {
        let page = page_with(json!({
            "properties": {
                "b": { "type": "checkbox", "checkbox": true },
                "a": { "type": "checkbox", "checkbox": false }
            }
        }));
        assert_eq!(page.property_names(), vec!["a", "b"]);
    }

    #[test]
    fn matches_link_id_accepts_any_spelling() {
        let page = PageRecord::new(PageArgs {
            layout_context: String::new(),
            page_id: "6e6921b9b1f54614ab3cbf1a73358a1f".into(),
            order: 0,
            metadata: mock_metadata(),
            found_directly_in_outline: false,
        });
        assert!(page.matches_link_id(PAGE_ID));
        assert!(page.matches_link_id(
            "https://www.notion.so/Getting-Started-6e6921b9b1f54614ab3cbf1a73358a1f"
        ));
        assert!(!page.matches_link_id("00000000000000000000000000000000"));
        assert!(!page.matches_link_id("not a link"));
    }

    #[test]
    fn matches_link_id_is_false_for_opaque_page_ids() {
        assert!(!page().matches_link_id("123"));
    }

    #[test]
    fn page_type_follows_parent_linkage() {
        assert_eq!(page().page_type(), PageType::Simple);
        let row = page_with(json!({
            "parent": { "type": "database_id", "database_id": "d" },
            "properties": {}
        }));
        assert_eq!(row.page_type(), PageType::DatabasePage);
    }

    #[test]
    fn title_uses_first_non_empty_configured_property() {
        let config = PageConfig::default();
        assert_eq!(page().title(&config), "FooBar");

        let named = page_with(json!({
            "properties": {
                "title": { "type": "title", "title": [] },
                "Name": { "type": "title", "title": [{ "plain_text": "Row" }] }
            }
        }));
        assert_eq!(named.title(&config), "Row");
        assert_eq!(page_with(json!({})).title(&config), "");
    }

    #[test]
    fn slug_prefers_explicit_value() {
        let config = PageConfig::default();
        let page = page();
        assert!(page.has_explicit_slug(&config));
        assert_eq!(page.slug(&config), "/getting-started");

        let bare = page_with(json!({ "properties": {} }));
        assert!(!bare.has_explicit_slug(&config));
        assert_eq!(bare.slug(&config), "/123");
    }

    #[test]
    fn keywords_are_none_when_blank_or_missing() {
        let config = PageConfig::default();
        assert_eq!(page().keywords(&config), None);

        let tagged = page_with(json!({
            "properties": {
                "Keywords": { "type": "rich_text", "rich_text": [{ "plain_text": "rust, docs" }] }
            }
        }));
        assert_eq!(tagged.keywords(&config).as_deref(), Some("rust, docs"));
    }
}
