//! Page property wire models and decoding.
//!
//! A Notion property value is a JSON object tagged by its `type` field, with the payload stored
//! under a key of the same name:
//!
//! ```json
//! { "id": "WPj%5E", "type": "number", "number": 42 }
//! ```
//!
//! Only the kinds consumed downstream get a dedicated variant. Every other kind decodes to
//! [`PropertyValue::Unsupported`], which no accessor matches.

use crate::{NotionError, NotionResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Kind tag reported for a property whose payload did not match its declared kind.
pub const MALFORMED_KIND: &str = "malformed";

// ============================================================================
// Public domain-level types
// ============================================================================

/// Property kinds with a dedicated [`PropertyValue`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Title,
    RichText,
    Number,
    Checkbox,
    Date,
}

impl PropertyKind {
    /// Maps a wire `type` tag to a kind, or `None` for kinds without a dedicated variant.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "title" => Some(Self::Title),
            "rich_text" => Some(Self::RichText),
            "number" => Some(Self::Number),
            "checkbox" => Some(Self::Checkbox),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    /// The wire `type` tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::RichText => "rich_text",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contiguous segment of rich text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRun {
    /// Author-facing text of the run, without annotations or links.
    pub plain_text: String,
}

/// Value of a `date` property.
///
/// `start` is optional here because the wire format is not trusted; a range without a start
/// is reported as absent by the accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
    /// Carried for completeness; not interpreted.
    pub time_zone: Option<String>,
}

/// A decoded page property.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Title(Vec<TextRun>),
    RichText(Vec<TextRun>),
    Number(Option<f64>),
    Checkbox(bool),
    /// `None` when the property exists but no date is set.
    Date(Option<DateRange>),
    /// Any other kind, or a malformed payload. Holds the raw `type` tag.
    Unsupported(String),
}

impl PropertyValue {
    /// Decode one property value, failing on schema mismatch.
    ///
    /// Unknown kinds are not an error: they decode to [`PropertyValue::Unsupported`].
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Translation`] if:
    /// - the value has no string `type` tag,
    /// - the payload for a known kind has missing fields or unexpected types. The message
    ///   includes the path of the failing field (e.g. `title[1].plain_text`).
    pub fn decode(value: &Value) -> NotionResult<Self> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| NotionError::Translation("property has no 'type' tag".to_string()))?;

        let Some(kind) = PropertyKind::from_tag(tag) else {
            return Ok(Self::Unsupported(tag.to_string()));
        };

        let decoded = match kind {
            PropertyKind::Title => {
                let wire: TitleWire = decode_payload(kind, value)?;
                Self::Title(runs_from_wire(wire.title))
            }
            PropertyKind::RichText => {
                let wire: RichTextWire = decode_payload(kind, value)?;
                Self::RichText(runs_from_wire(wire.rich_text))
            }
            PropertyKind::Number => {
                let wire: NumberWire = decode_payload(kind, value)?;
                Self::Number(wire.number)
            }
            PropertyKind::Checkbox => {
                let wire: CheckboxWire = decode_payload(kind, value)?;
                Self::Checkbox(wire.checkbox)
            }
            PropertyKind::Date => {
                let wire: DatePropertyWire = decode_payload(kind, value)?;
                Self::Date(wire.date.map(|date| DateRange {
                    start: date.start,
                    end: date.end,
                    time_zone: date.time_zone,
                }))
            }
        };

        Ok(decoded)
    }

    /// Decode one property value, never failing.
    ///
    /// Anything [`PropertyValue::decode`] rejects becomes `Unsupported("malformed")`.
    pub fn decode_lenient(value: &Value) -> Self {
        Self::decode(value).unwrap_or_else(|err| {
            tracing::debug!("treating property as unsupported: {}", err);
            Self::Unsupported(MALFORMED_KIND.to_string())
        })
    }

    /// The kind this value was decoded as, or `None` for unsupported values.
    pub fn kind(&self) -> Option<PropertyKind> {
        match self {
            Self::Title(_) => Some(PropertyKind::Title),
            Self::RichText(_) => Some(PropertyKind::RichText),
            Self::Number(_) => Some(PropertyKind::Number),
            Self::Checkbox(_) => Some(PropertyKind::Checkbox),
            Self::Date(_) => Some(PropertyKind::Date),
            Self::Unsupported(_) => None,
        }
    }

    /// The wire tag for this value, including the raw tag of unsupported values.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Unsupported(tag) => tag,
            other => other.kind().map(|k| k.as_str()).unwrap_or(MALFORMED_KIND),
        }
    }

    /// The runs of a text-bearing value.
    pub fn text_runs(&self) -> Option<&[TextRun]> {
        match self {
            Self::Title(runs) | Self::RichText(runs) => Some(runs),
            _ => None,
        }
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================
//
// Each payload struct names only the field for its kind; `id`, `type` and any other keys on
// the property object are ignored.

#[derive(Deserialize)]
struct TitleWire {
    title: Vec<TextRunWire>,
}

#[derive(Deserialize)]
struct RichTextWire {
    rich_text: Vec<TextRunWire>,
}

#[derive(Deserialize)]
struct NumberWire {
    number: Option<f64>,
}

#[derive(Deserialize)]
struct CheckboxWire {
    checkbox: bool,
}

#[derive(Deserialize)]
struct DatePropertyWire {
    date: Option<DateWire>,
}

#[derive(Deserialize)]
struct DateWire {
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    end: Option<String>,
    #[serde(default)]
    time_zone: Option<String>,
}

#[derive(Deserialize)]
struct TextRunWire {
    plain_text: String,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn decode_payload<T: DeserializeOwned>(kind: PropertyKind, value: &Value) -> NotionResult<T> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        let path = if path.is_empty() || path == "." {
            "<root>"
        } else {
            path.as_str()
        };
        NotionError::Translation(format!(
            "{kind} property schema mismatch at {path}: {source}"
        ))
    })
}

fn runs_from_wire(runs: Vec<TextRunWire>) -> Vec<TextRun> {
    runs.into_iter()
        .map(|run| TextRun {
            plain_text: run.plain_text,
        })
        .collect()
}
