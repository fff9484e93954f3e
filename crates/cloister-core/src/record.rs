//! Record parsing — turns a loosely-typed upstream donation value into a
//! [`DonationRecord`].
//!
//! Upstream records come in several historical shapes: a JSON-encoded string,
//! an object with a structured `methods` list, flat legacy fields, or any mix
//! of these. Each logical legacy field is resolved through an ordered list of
//! candidate key names; the first key holding a non-blank value wins.

use crate::{
    error::RecordError,
    types::{BankAccount, Custom, DonationMethod, Link, MethodKind},
};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Candidate key names, in precedence order
// ---------------------------------------------------------------------------

const ACCOUNT_KEYS: &[&str] = &["account", "account_number", "accountNumber"];
const BANK_KEYS: &[&str] = &["bank"];
const HOLDER_KEYS: &[&str] = &["holder"];
const DESCRIPTION_KEYS: &[&str] = &["description", "account_description"];
const PAGE_URL_KEYS: &[&str] = &["page_url", "pageUrl", "pageURL", "url"];
const LINK_LABEL_KEYS: &[&str] = &["link_label", "linkLabel"];
const NOTE_KEYS: &[&str] = &["note"];

// ---------------------------------------------------------------------------
// Public record types
// ---------------------------------------------------------------------------

/// A donation record after the parse step.
///
/// `methods` holds the explicit entries that parsed into a contentful method,
/// in their original order. Entries that were malformed or carried an unknown
/// `type` tag are dropped here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationRecord {
    pub methods: Vec<DonationMethod>,
    pub legacy: LegacyFields,
}

/// Flat top-level fields from records written before the `methods` list
/// existed. All values are trimmed and `None` when blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyFields {
    pub account: Option<String>,
    pub bank: Option<String>,
    pub holder: Option<String>,
    pub description: Option<String>,
    pub page_url: Option<String>,
    pub link_label: Option<String>,
    pub note: Option<String>,
}

impl DonationRecord {
    /// Strictly parse a raw upstream value.
    ///
    /// `null` yields an empty record. Strings are decoded as JSON once; the
    /// decoded value must then be an object (or `null`).
    pub fn parse(raw: &Value) -> Result<Self, RecordError> {
        match raw {
            Value::Null => Ok(Self::default()),
            Value::String(encoded) => {
                let decoded: Value = serde_json::from_str(encoded)?;
                match decoded {
                    Value::Null => Ok(Self::default()),
                    Value::Object(ref obj) => Ok(Self::from_object(obj)),
                    ref other => Err(RecordError::NotAnObject {
                        found: value_kind(other),
                    }),
                }
            }
            Value::Object(obj) => Ok(Self::from_object(obj)),
            other => Err(RecordError::NotAnObject {
                found: value_kind(other),
            }),
        }
    }

    /// Parse a JSON document holding a raw donation value.
    pub fn parse_str(src: &str) -> Result<Self, RecordError> {
        let raw: Value = serde_json::from_str(src)?;
        Self::parse(&raw)
    }

    /// Free-text note shown next to the method list, if any.
    pub fn note(&self) -> Option<&str> {
        self.legacy.note.as_deref()
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        let methods = match obj.get("methods") {
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .filter_map(|(index, entry)| parse_method_entry(index, entry))
                .collect(),
            _ => Vec::new(),
        };

        let legacy = LegacyFields {
            account: first_text(obj, ACCOUNT_KEYS),
            bank: first_text(obj, BANK_KEYS),
            holder: first_text(obj, HOLDER_KEYS),
            description: first_text(obj, DESCRIPTION_KEYS),
            page_url: first_text(obj, PAGE_URL_KEYS),
            link_label: first_text(obj, LINK_LABEL_KEYS),
            note: first_text(obj, NOTE_KEYS),
        };

        Self { methods, legacy }
    }
}

// ---------------------------------------------------------------------------
// Method entries
// ---------------------------------------------------------------------------

/// Parse one element of the `methods` list. Returns `None` for anything that
/// does not produce a contentful method.
fn parse_method_entry(index: usize, entry: &Value) -> Option<DonationMethod> {
    let obj = match entry {
        Value::String(url) => return text(url).map(|url| Link::new(url).into()),
        Value::Object(obj) => obj,
        other => {
            tracing::debug!(
                index,
                kind = value_kind(other),
                "ignoring non-object donation method"
            );
            return None;
        }
    };

    let tag = obj.get("type");
    let Some(kind) = tag.and_then(Value::as_str).and_then(MethodKind::from_tag) else {
        tracing::debug!(index, ?tag, "ignoring donation method with unknown type");
        return None;
    };

    let method: DonationMethod = match kind {
        MethodKind::BankAccount => BankAccount {
            bank: field(obj, "bank"),
            holder: field(obj, "holder"),
            number: field(obj, "number"),
            description: field(obj, "description"),
        }
        .into(),
        MethodKind::Link => Link {
            url: field(obj, "url")?,
            label: field(obj, "label"),
        }
        .into(),
        MethodKind::Custom => Custom {
            value: field(obj, "value")?,
            label: field(obj, "label"),
        }
        .into(),
    };

    if method.is_contentful() {
        Some(method)
    } else {
        tracing::debug!(index, %kind, "dropping donation method without content");
        None
    }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(value_text)
}

fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| field(obj, key))
}

/// Text content of a scalar value. Numbers keep their JSON spelling.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => text(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
