//! cloister-core — donation record handling for the monastery directory.
//!
//! Institution records carry a loosely-typed `donation` value whose shape has
//! changed over time. This crate parses that value and normalises it into a
//! clean list of [`DonationMethod`]s for display.
//!
//! # Pipeline
//!
//! ```text
//! raw Value ──► DonationRecord::parse ──► Normalizer ──► Vec<DonationMethod>
//! ```

pub mod config;
pub mod error;
pub mod normalizer;
pub mod record;
pub mod types;

pub use config::{Config, Labels};
pub use error::RecordError;
pub use normalizer::{has_donation_details, normalize_donation_methods, Normalizer};
pub use record::{DonationRecord, LegacyFields};
pub use types::{BankAccount, Custom, DonationMethod, Link, MethodKind};
