//! Plain-text rendering of donation methods.
//!
//! Each method becomes one or more display lines using the localized
//! [`Labels`]. An empty method list renders to no lines; showing an empty
//! state is the caller's job.

use cloister_core::{DonationMethod, Labels};

/// Render `methods` in order, one block of lines per method.
pub fn render_methods(methods: &[DonationMethod], labels: &Labels) -> Vec<String> {
    methods
        .iter()
        .flat_map(|method| render_method(method, labels))
        .collect()
}

pub fn render_method(method: &DonationMethod, labels: &Labels) -> Vec<String> {
    match method {
        DonationMethod::BankAccount(account) => {
            let mut lines = Vec::with_capacity(4);
            if let Some(bank) = &account.bank {
                lines.push(format!("{}: {bank}", labels.bank));
            }
            if let Some(holder) = &account.holder {
                lines.push(format!("{}: {holder}", labels.holder));
            }
            if let Some(number) = &account.number {
                lines.push(format!("{}: {number}", labels.account_number));
            }
            if let Some(description) = &account.description {
                lines.push(description.clone());
            }
            lines
        }
        DonationMethod::Link(link) => {
            let label = link.label.as_deref().unwrap_or(&labels.donation_link);
            vec![format!("{label} ↗ {}", link.url)]
        }
        DonationMethod::Custom(custom) => match &custom.label {
            Some(label) => vec![format!("{label}: {}", custom.value)],
            None => vec![custom.value.clone()],
        },
    }
}
