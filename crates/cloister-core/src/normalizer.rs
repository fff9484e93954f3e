//! Normalizer — turns raw donation values into an ordered, deduplicated list
//! of [`DonationMethod`]s.
//!
//! Processing runs in three passes over a freshly built output list:
//!
//! 1. explicit `methods` entries, in their original order;
//! 2. the legacy account number, merged into a bank account with the same
//!    number or appended as a new one;
//! 3. the legacy page URL, merged into a link with the same URL or appended.
//!
//! Merges only fill absent fields; values already in the list always win.
//! Malformed input never fails, it just produces fewer methods.

use crate::{
    config::Labels,
    record::DonationRecord,
    types::{BankAccount, DonationMethod, Link},
};
use serde_json::Value;
use std::collections::HashMap;

/// Normalise with the built-in labels. See [`Normalizer::normalize`].
pub fn normalize_donation_methods(raw: &Value) -> Vec<DonationMethod> {
    Normalizer::default().normalize(raw)
}

/// `true` iff [`normalize_donation_methods`] yields at least one method.
pub fn has_donation_details(raw: &Value) -> bool {
    !normalize_donation_methods(raw).is_empty()
}

/// Donation record normalizer carrying the localized default link label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    donation_page_label: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&Labels::default())
    }
}

impl Normalizer {
    pub fn new(labels: &Labels) -> Self {
        Self {
            donation_page_label: labels.donation_page.clone(),
        }
    }

    /// Normalise a raw upstream value (`null`, JSON string, or object).
    ///
    /// Unparseable or non-object input yields an empty list.
    pub fn normalize(&self, raw: &Value) -> Vec<DonationMethod> {
        match DonationRecord::parse(raw) {
            Ok(record) => self.normalize_record(&record),
            Err(err) => {
                tracing::debug!(%err, "donation record ignored");
                Vec::new()
            }
        }
    }

    pub fn has_details(&self, raw: &Value) -> bool {
        !self.normalize(raw).is_empty()
    }

    /// Normalise an already-parsed record.
    pub fn normalize_record(&self, record: &DonationRecord) -> Vec<DonationMethod> {
        let mut list = MethodList::default();

        for method in &record.methods {
            list.push(method.clone());
        }

        let legacy = &record.legacy;

        if let Some(number) = &legacy.account {
            list.push(
                BankAccount {
                    bank: legacy.bank.clone(),
                    holder: legacy.holder.clone(),
                    number: Some(number.clone()),
                    description: legacy.description.clone(),
                }
                .into(),
            );
        }

        if let Some(url) = &legacy.page_url {
            // An existing link only ever takes the explicit legacy label; the
            // default label is for links this pass introduces.
            let label = if list.has_link(url) {
                legacy.link_label.clone()
            } else {
                legacy.link_label.clone().or_else(|| {
                    legacy
                        .note
                        .is_none()
                        .then(|| self.donation_page_label.clone())
                })
            };
            list.push(
                Link {
                    url: url.clone(),
                    label,
                }
                .into(),
            );
        }

        list.into_vec()
    }
}

// ---------------------------------------------------------------------------
// MethodList
// ---------------------------------------------------------------------------

/// Output under construction, indexed by dedup key.
///
/// Bank accounts are keyed by account number and links by URL. Pushing a
/// method whose key is already present replaces the earlier entry with a
/// merged copy at the same position instead of appending.
#[derive(Debug, Default)]
struct MethodList {
    methods: Vec<DonationMethod>,
    accounts: HashMap<String, usize>,
    links: HashMap<String, usize>,
}

impl MethodList {
    fn has_link(&self, url: &str) -> bool {
        self.links.contains_key(url)
    }

    fn push(&mut self, method: DonationMethod) {
        if !method.is_contentful() {
            return;
        }

        let position = self.methods.len();
        match &method {
            DonationMethod::BankAccount(incoming) => {
                if let Some(number) = &incoming.number {
                    if let Some(&index) = self.accounts.get(number) {
                        self.merge_account(index, incoming);
                        return;
                    }
                    self.accounts.insert(number.clone(), position);
                }
            }
            DonationMethod::Link(incoming) => {
                if let Some(&index) = self.links.get(&incoming.url) {
                    self.merge_link(index, incoming);
                    return;
                }
                self.links.insert(incoming.url.clone(), position);
            }
            DonationMethod::Custom(_) => {}
        }
        self.methods.push(method);
    }

    fn merge_account(&mut self, index: usize, incoming: &BankAccount) {
        if let DonationMethod::BankAccount(existing) = &self.methods[index] {
            tracing::trace!(index, number = ?existing.number, "merging bank account");
            let merged = existing.clone().or_fill(incoming);
            self.methods[index] = merged.into();
        }
    }

    fn merge_link(&mut self, index: usize, incoming: &Link) {
        if let DonationMethod::Link(existing) = &self.methods[index] {
            tracing::trace!(index, url = %existing.url, "merging link");
            let merged = Link {
                url: existing.url.clone(),
                label: existing.label.clone().or_else(|| incoming.label.clone()),
            };
            self.methods[index] = merged.into();
        }
    }

    fn into_vec(self) -> Vec<DonationMethod> {
        self.methods
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
