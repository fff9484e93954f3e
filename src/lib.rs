//! cloister — monastery and convent directory tools.
//!
//! Re-exports the workspace crates so integration tests and the binary can
//! import everything from one place, and adds the plain-text renderer used by
//! the CLI.
//!
//! # Architecture
//!
//! ```text
//! Directory ──► Institution.donation ──► Normalizer ──► render
//!                                            │
//!                                            └──► DonationListing ──► Page
//! ```

pub mod render;

pub use cloister_core::{
    config, has_donation_details, normalize_donation_methods, BankAccount, Config, Custom,
    DonationMethod, DonationRecord, Labels, LegacyFields, Link, MethodKind, Normalizer,
    RecordError,
};
pub use cloister_directory::{
    Directory, DirectoryError, DonationListing, Institution, InstitutionId, ListedInstitution,
    Page,
};
