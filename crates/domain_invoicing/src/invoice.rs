//! Invoice aggregate
//!
//! An invoice is assembled atomically from validated inputs: rows are
//! normalized, totals computed, the number stamped, and the due date
//! derived, or the whole creation fails. Once created an invoice is never
//! edited or voided; its business identity is the invoice number, whose
//! uniqueness the store enforces.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{temporal, InvoiceId};

use crate::config::InvoicingConfig;
use crate::error::InvoicingError;
use crate::line_item::{normalize, LineItem, LineItemDraft};
use crate::numbering::next_invoice_number;
use crate::totals::{InvoiceTotals, Jurisdiction};

/// A persisted-or-persistable invoice record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Surrogate identifier used by storage
    pub id: InvoiceId,
    /// Business identity, unique per deployment
    pub invoice_number: String,
    /// Free-text billing address; jurisdiction is derived from it
    pub address: String,
    pub items: Vec<LineItem>,
    pub totals: InvoiceTotals,
    pub issue_date: NaiveDate,
    /// Issue date plus the configured payment term, in calendar days
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Jurisdiction of this invoice's supply under the given configuration
    pub fn jurisdiction(&self, config: &InvoicingConfig) -> Jurisdiction {
        Jurisdiction::of(&self.address, &config.home_state_token)
    }
}

/// Creates an invoice from raw form rows.
///
/// Normalizes the rows, computes GST totals from the address jurisdiction,
/// stamps the next sequential number from `prior_count`, and derives the
/// due date. Returns a validation error without constructing anything when
/// the rows or address are invalid; never touches storage.
pub fn create_invoice(
    drafts: &[LineItemDraft],
    address: &str,
    prior_count: u64,
    now: DateTime<Utc>,
    config: &InvoicingConfig,
) -> Result<Invoice, InvoicingError> {
    if address.trim().is_empty() {
        return Err(InvoicingError::EmptyAddress);
    }

    let items = normalize(drafts, config.currency)?;
    let jurisdiction = Jurisdiction::of(address, &config.home_state_token);
    let totals = InvoiceTotals::compute(&items, jurisdiction, config);

    let issue_date = now.date_naive();
    let invoice_number = next_invoice_number(&config.number_prefix, prior_count, issue_date);

    Ok(Invoice {
        id: InvoiceId::new_v7(),
        invoice_number,
        address: address.to_string(),
        items,
        totals,
        issue_date,
        due_date: temporal::due_date(issue_date, config.due_days),
        created_at: now,
        updated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn drafts() -> Vec<LineItemDraft> {
        vec![
            LineItemDraft::new("Development", dec!(2), dec!(100)),
            LineItemDraft::new("Hosting", dec!(1), dec!(50)),
        ]
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn assembles_number_dates_and_totals() {
        let invoice = create_invoice(
            &drafts(),
            "Patna, Bihar",
            41,
            at(2025, 6, 1),
            &InvoicingConfig::default(),
        )
        .unwrap();

        assert_eq!(invoice.invoice_number, "DWPL/2025/0042");
        assert_eq!(invoice.issue_date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());
        assert_eq!(invoice.totals.sub_total.amount(), dec!(250));
        assert_eq!(invoice.totals.cgst.amount(), dec!(22.5));
        assert!(invoice.totals.igst.is_zero());
        assert_eq!(invoice.created_at, invoice.updated_at);
    }

    #[test]
    fn rejects_empty_rows_before_any_computation() {
        let err = create_invoice(
            &[],
            "Patna, Bihar",
            0,
            at(2025, 1, 1),
            &InvoicingConfig::default(),
        )
        .unwrap_err();

        assert_eq!(err, InvoicingError::EmptyItems);
    }

    #[test]
    fn rejects_blank_address() {
        let err = create_invoice(
            &drafts(),
            "  ",
            0,
            at(2025, 1, 1),
            &InvoicingConfig::default(),
        )
        .unwrap_err();

        assert_eq!(err, InvoicingError::EmptyAddress);
    }

    #[test]
    fn jurisdiction_follows_the_address() {
        let config = InvoicingConfig::default();
        let invoice = create_invoice(
            &drafts(),
            "Mumbai, Maharashtra",
            0,
            at(2025, 1, 1),
            &config,
        )
        .unwrap();

        assert_eq!(invoice.jurisdiction(&config), Jurisdiction::OutOfState);
        assert_eq!(invoice.totals.igst.amount(), dec!(45));
    }
}
