//! Error types for donation record parsing.

use thiserror::Error;

/// Why a raw donation value could not be read as a record.
///
/// The normalizer never surfaces these to callers; they exist for the strict
/// [`DonationRecord::parse`](crate::record::DonationRecord::parse) path and
/// for diagnostics.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("donation record is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("donation record must be an object, found {found}")]
    NotAnObject { found: &'static str },
}
