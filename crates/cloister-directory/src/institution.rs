//! Institution records as they arrive from the data store.

use cloister_core::{DonationMethod, DonationRecord, Normalizer};
use serde::Deserialize;
use serde_json::Value;

/// Primary key of an institution. The hosted store uses integers; hand-made
/// fallback rows sometimes use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum InstitutionId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for InstitutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstitutionId::Number(n) => write!(f, "{n}"),
            InstitutionId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A monastery or convent. Unknown columns are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Institution {
    pub id: InstitutionId,
    pub name: String,
    pub slug: String,
    /// Religious order or congregation.
    #[serde(default, rename = "type")]
    pub order: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    /// Raw donation value, normalised on demand.
    #[serde(default)]
    pub donation: Value,
}

impl Institution {
    pub fn donation_methods(&self, normalizer: &Normalizer) -> Vec<DonationMethod> {
        normalizer.normalize(&self.donation)
    }

    /// Free-text donation note, if the record parses and carries one.
    pub fn donation_note(&self) -> Option<String> {
        DonationRecord::parse(&self.donation)
            .ok()
            .and_then(|record| record.legacy.note)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
