//! Domain-specific assertion helpers for cloister harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* normalisation invariant was violated.

use cloister::{DonationMethod, Link};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Method assertions
// ---------------------------------------------------------------------------

/// Assert that a method list contains exactly one link with `url`, carrying
/// the expected label.
///
/// ```rust
/// assert_single_link!(methods, "https://x", None);
/// ```
#[macro_export]
macro_rules! assert_single_link {
    ($methods:expr, $url:expr, $label:expr) => {{
        let methods: &[cloister::DonationMethod] = &$methods;
        let url: &str = $url;
        let expected: Option<&str> = $label;
        let links: Vec<&cloister::Link> = methods
            .iter()
            .filter_map(|m| match m {
                cloister::DonationMethod::Link(l) if l.url == url => Some(l),
                _ => None,
            })
            .collect();
        match links.as_slice() {
            [link] => pretty_assertions::assert_eq!(
                link.label.as_deref(),
                expected,
                "label of link {:?}",
                url
            ),
            other => panic!(
                "assert_single_link! failed: expected one link to {:?}, found {}.\n  methods: {:#?}",
                url,
                other.len(),
                methods
            ),
        }
    }};
}

/// Assert that a method list contains exactly one bank account with `number`
/// and return it.
#[macro_export]
macro_rules! single_bank_account {
    ($methods:expr, $number:expr) => {{
        let methods: &[cloister::DonationMethod] = &$methods;
        let number: &str = $number;
        let accounts: Vec<&cloister::BankAccount> = methods
            .iter()
            .filter_map(|m| match m {
                cloister::DonationMethod::BankAccount(a) if a.number.as_deref() == Some(number) => {
                    Some(a)
                }
                _ => None,
            })
            .collect();
        match accounts.as_slice() {
            [account] => (*account).clone(),
            other => panic!(
                "single_bank_account! failed: expected one account {:?}, found {}.\n  methods: {:#?}",
                number,
                other.len(),
                methods
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Invariant helpers
// ---------------------------------------------------------------------------

/// No two bank accounts share a number and no two links share a URL.
pub fn assert_no_duplicate_keys(methods: &[DonationMethod]) {
    let mut numbers = HashSet::new();
    let mut urls = HashSet::new();
    for method in methods {
        match method {
            DonationMethod::BankAccount(account) => {
                if let Some(number) = &account.number {
                    assert!(
                        numbers.insert(number.clone()),
                        "duplicate bank account {number:?} in {methods:#?}"
                    );
                }
            }
            DonationMethod::Link(Link { url, .. }) => {
                assert!(urls.insert(url.clone()), "duplicate link {url:?} in {methods:#?}");
            }
            DonationMethod::Custom(_) => {}
        }
    }
}

/// Every method is contentful and every string field is trimmed and non-empty.
pub fn assert_clean(methods: &[DonationMethod]) {
    fn clean(field: &str, value: &str) {
        assert!(
            !value.is_empty() && value.trim() == value,
            "{field} is not a trimmed, non-empty string: {value:?}"
        );
    }

    for method in methods {
        assert!(method.is_contentful(), "non-contentful method in output: {method:?}");
        match method {
            DonationMethod::BankAccount(a) => {
                for (name, value) in [
                    ("bank", &a.bank),
                    ("holder", &a.holder),
                    ("number", &a.number),
                    ("description", &a.description),
                ] {
                    if let Some(value) = value {
                        clean(name, value);
                    }
                }
            }
            DonationMethod::Link(l) => {
                clean("url", &l.url);
                if let Some(label) = &l.label {
                    clean("label", label);
                }
            }
            DonationMethod::Custom(c) => {
                clean("value", &c.value);
                if let Some(label) = &c.label {
                    clean("label", label);
                }
            }
        }
    }
}
