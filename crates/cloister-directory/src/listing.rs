//! Donation listing — institutions that have something to show in the
//! contribute section, split into fixed-size pages.

use crate::{institution::Institution, Directory};
use cloister_core::{DonationMethod, Normalizer};

/// An institution paired with its normalised donation methods.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedInstitution<'a> {
    pub institution: &'a Institution,
    pub methods: Vec<DonationMethod>,
}

/// Institutions with at least one donation method, in directory order.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationListing<'a> {
    entries: Vec<ListedInstitution<'a>>,
}

impl<'a> DonationListing<'a> {
    pub fn build(directory: &'a Directory, normalizer: &Normalizer) -> Self {
        let entries = directory
            .institutions()
            .iter()
            .filter_map(|institution| {
                let methods = institution.donation_methods(normalizer);
                if methods.is_empty() {
                    tracing::debug!(slug = %institution.slug, "no donation details, skipping");
                    None
                } else {
                    Some(ListedInstitution {
                        institution,
                        methods,
                    })
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ListedInstitution<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        self.entries.len().div_ceil(page_size.max(1)).max(1)
    }

    /// Return the 1-based `page`, clamped into `1..=total_pages`. A zero
    /// `page_size` is treated as 1.
    pub fn page(&self, page: usize, page_size: usize) -> Page<'_, 'a> {
        let page_size = page_size.max(1);
        let total_pages = self.total_pages(page_size);
        let number = page.clamp(1, total_pages);

        let start = ((number - 1) * page_size).min(self.entries.len());
        let end = (start + page_size).min(self.entries.len());

        Page {
            number,
            total_pages,
            total: self.entries.len(),
            offset: start,
            items: &self.entries[start..end],
        }
    }
}

/// One page of a [`DonationListing`].
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'l, 'a> {
    /// 1-based page number after clamping.
    pub number: usize,
    pub total_pages: usize,
    /// Size of the whole listing.
    pub total: usize,
    offset: usize,
    pub items: &'l [ListedInstitution<'a>],
}

impl Page<'_, '_> {
    /// 1-based position of the first item, or 0 for an empty listing.
    pub fn first_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.offset + 1
        }
    }

    /// 1-based position of the last item, or 0 for an empty listing.
    pub fn last_position(&self) -> usize {
        self.offset + self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
