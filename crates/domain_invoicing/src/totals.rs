//! GST totals calculation
//!
//! The tax branch is decided by the supply jurisdiction: in-state supplies
//! split the levy into CGST + SGST, out-of-state supplies pay IGST. All
//! values keep full decimal precision; two-decimal rounding belongs to the
//! display layer.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

use crate::config::InvoicingConfig;
use crate::line_item::LineItem;

/// Tax jurisdiction of a supply, derived from the billing address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    /// Address is in the seller's home state: CGST + SGST apply
    HomeState,
    /// Address is outside the home state: IGST applies
    OutOfState,
}

impl Jurisdiction {
    /// Derives the jurisdiction from a free-text address.
    ///
    /// A case-insensitive substring match on the configured home-state
    /// token is the sole rule; there is no postal-code or structured
    /// address parsing.
    pub fn of(address: &str, home_state_token: &str) -> Self {
        if address
            .to_lowercase()
            .contains(&home_state_token.to_lowercase())
        {
            Jurisdiction::HomeState
        } else {
            Jurisdiction::OutOfState
        }
    }

    pub fn is_home_state(&self) -> bool {
        matches!(self, Jurisdiction::HomeState)
    }
}

/// Computed tax breakdown for an invoice
///
/// Invariants: `sub_total` is the sum of item amounts; exactly one of the
/// CGST+SGST pair or IGST is non-zero (both are zero only for a zero
/// sub-total); `gross_amount = sub_total + cgst + sgst + igst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub sub_total: Money,
    pub cgst: Money,
    pub sgst: Money,
    pub igst: Money,
    pub gross_amount: Money,
}

impl InvoiceTotals {
    /// All-zero totals in the given currency
    pub fn zero(currency: Currency) -> Self {
        let zero = Money::zero(currency);
        Self {
            sub_total: zero,
            cgst: zero,
            sgst: zero,
            igst: zero,
            gross_amount: zero,
        }
    }

    /// Computes totals for a set of validated line items.
    ///
    /// An empty slice is a valid degenerate case and yields all-zero
    /// totals; rejecting empty invoices happens upstream at normalization.
    pub fn compute(
        items: &[LineItem],
        jurisdiction: Jurisdiction,
        config: &InvoicingConfig,
    ) -> Self {
        let sub_total = items
            .iter()
            .fold(Money::zero(config.currency), |acc, item| acc + item.amount);

        let zero = Money::zero(config.currency);
        let (cgst, sgst, igst) = if jurisdiction.is_home_state() {
            (
                config.cgst_rate.apply(&sub_total),
                config.sgst_rate.apply(&sub_total),
                zero,
            )
        } else {
            (zero, zero, config.igst_rate.apply(&sub_total))
        };

        let gross_amount = sub_total + cgst + sgst + igst;

        Self {
            sub_total,
            cgst,
            sgst,
            igst,
            gross_amount,
        }
    }
}
