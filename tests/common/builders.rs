//! Test builders — ergonomic constructors for raw donation records and
//! institution rows.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw donation values as the data store would hold them.
///
/// # Example
///
/// ```rust
/// let raw = RecordBuilder::new()
///     .bank_account(Some("Kookmin"), None, Some("111-222"))
///     .link("https://x.example", None)
///     .legacy("page_url", "https://x.example")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RecordBuilder {
    methods: Option<Vec<Value>>,
    legacy: Map<String, Value>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an arbitrary `methods` entry.
    pub fn entry(mut self, entry: Value) -> Self {
        self.methods.get_or_insert_with(Vec::new).push(entry);
        self
    }

    pub fn bank_account(
        self,
        bank: Option<&str>,
        holder: Option<&str>,
        number: Option<&str>,
    ) -> Self {
        let mut obj = Map::new();
        obj.insert("type".into(), "bank_account".into());
        for (key, value) in [("bank", bank), ("holder", holder), ("number", number)] {
            if let Some(value) = value {
                obj.insert(key.into(), value.into());
            }
        }
        self.entry(Value::Object(obj))
    }

    pub fn link(self, url: &str, label: Option<&str>) -> Self {
        match label {
            Some(label) => self.entry(json!({ "type": "link", "url": url, "label": label })),
            None => self.entry(json!({ "type": "link", "url": url })),
        }
    }

    pub fn custom(self, value: &str, label: Option<&str>) -> Self {
        match label {
            Some(label) => self.entry(json!({ "type": "custom", "value": value, "label": label })),
            None => self.entry(json!({ "type": "custom", "value": value })),
        }
    }

    pub fn bare_url(self, url: &str) -> Self {
        self.entry(Value::String(url.to_string()))
    }

    /// Set a flat top-level field, e.g. `account` or `pageUrl`.
    pub fn legacy(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.legacy.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> Value {
        let mut obj = self.legacy;
        if let Some(methods) = self.methods {
            obj.insert("methods".into(), Value::Array(methods));
        }
        Value::Object(obj)
    }

    /// Build and encode as a JSON string, the way some rows store it.
    pub fn build_encoded(self) -> Value {
        Value::String(self.build().to_string())
    }
}

// ---------------------------------------------------------------------------
// Institution rows
// ---------------------------------------------------------------------------

/// One institution row with the given donation value.
pub fn institution_row(id: i64, slug: &str, donation: Value) -> Value {
    json!({
        "id": id,
        "name": format!("Institution {id}"),
        "slug": slug,
        "type": "베네딕도회",
        "donation": donation
    })
}

/// A JSON array of `n` rows; every `skip_every`-th row has no donation data.
pub fn institution_rows(n: usize, skip_every: usize) -> String {
    let rows: Vec<Value> = (0..n)
        .map(|i| {
            let donation = if skip_every > 0 && i % skip_every == 0 {
                Value::Null
            } else {
                json!({ "account": format!("{i:03}-00-{i:06}") })
            };
            institution_row(i as i64, &format!("house-{i}"), donation)
        })
        .collect();
    serde_json::to_string(&rows).expect("rows serialise")
}
