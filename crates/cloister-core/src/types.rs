//! Core types for cloister-core.
//!
//! This module defines the normalised [`DonationMethod`] union and its three
//! variants. The serialised form is the same shape the structured `methods`
//! list accepts, so normalised output can be written back upstream unchanged.

use serde::{Deserialize, Serialize};

/// One concrete way to financially support an institution.
///
/// Serialised with an internal `type` tag (`bank_account`, `link`, `custom`);
/// absent optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DonationMethod {
    BankAccount(BankAccount),
    Link(Link),
    Custom(Custom),
}

impl DonationMethod {
    /// Whether the method carries at least one value worth displaying.
    pub fn is_contentful(&self) -> bool {
        match self {
            DonationMethod::BankAccount(account) => account.is_contentful(),
            DonationMethod::Link(link) => present(Some(&link.url)),
            DonationMethod::Custom(custom) => present(Some(&custom.value)),
        }
    }

    pub fn kind(&self) -> MethodKind {
        match self {
            DonationMethod::BankAccount(_) => MethodKind::BankAccount,
            DonationMethod::Link(_) => MethodKind::Link,
            DonationMethod::Custom(_) => MethodKind::Custom,
        }
    }
}

impl From<BankAccount> for DonationMethod {
    fn from(account: BankAccount) -> Self {
        DonationMethod::BankAccount(account)
    }
}

impl From<Link> for DonationMethod {
    fn from(link: Link) -> Self {
        DonationMethod::Link(link)
    }
}

impl From<Custom> for DonationMethod {
    fn from(custom: Custom) -> Self {
        DonationMethod::Custom(custom)
    }
}

/// Bank transfer details. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,
    /// Account number; the deduplication key for bank accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BankAccount {
    pub fn is_contentful(&self) -> bool {
        present(self.bank.as_ref())
            || present(self.holder.as_ref())
            || present(self.number.as_ref())
            || present(self.description.as_ref())
    }

    /// Fill `bank`, `holder`, and `description` from `fallback` where they are
    /// absent. The account number is never touched.
    pub fn or_fill(self, fallback: &BankAccount) -> Self {
        Self {
            bank: self.bank.or_else(|| fallback.bank.clone()),
            holder: self.holder.or_else(|| fallback.holder.clone()),
            number: self.number,
            description: self.description.or_else(|| fallback.description.clone()),
        }
    }
}

/// External donation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Free-text donation instruction, e.g. "call the guest house".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Custom {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Discriminant of a [`DonationMethod`], matching its serialised `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    BankAccount,
    Link,
    Custom,
}

impl MethodKind {
    /// Parse a `type` tag. Tags are matched exactly.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bank_account" => Some(MethodKind::BankAccount),
            "link" => Some(MethodKind::Link),
            "custom" => Some(MethodKind::Custom),
            _ => None,
        }
    }
}

impl std::fmt::Display for MethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MethodKind::BankAccount => write!(f, "bank_account"),
            MethodKind::Link => write!(f, "link"),
            MethodKind::Custom => write!(f, "custom"),
        }
    }
}

fn present(value: Option<&String>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
