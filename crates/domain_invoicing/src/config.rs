//! Invoicing configuration
//!
//! Tax rates, the home-state jurisdiction token, the invoice-number prefix,
//! and the payment term are deployment configuration, not hard-coded
//! business truths. The defaults reproduce the behavior of a single-state
//! Indian GST deployment: intra-state supplies split 9% CGST + 9% SGST,
//! inter-state supplies charge 18% IGST.

use core_kernel::{Currency, Rate};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Configuration constants for invoice creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoicingConfig {
    /// Invoice-number prefix, e.g. "DWPL" in "DWPL/2025/0001"
    pub number_prefix: String,
    /// Case-insensitive substring that marks an address as in-state
    pub home_state_token: String,
    /// Human-readable jurisdiction label shown beside the IGST field
    pub home_state_label: String,
    /// CGST rate applied to in-state supplies
    pub cgst_rate: Rate,
    /// SGST rate applied to in-state supplies
    pub sgst_rate: Rate,
    /// IGST rate applied to out-of-state supplies
    pub igst_rate: Rate,
    /// Calendar days between issue date and due date
    pub due_days: u32,
    /// Invoice currency
    pub currency: Currency,
}

impl Default for InvoicingConfig {
    fn default() -> Self {
        Self {
            number_prefix: "DWPL".to_string(),
            home_state_token: "bihar".to_string(),
            home_state_label: "Bihar".to_string(),
            cgst_rate: Rate::new(dec!(0.09)),
            sgst_rate: Rate::new(dec!(0.09)),
            igst_rate: Rate::new(dec!(0.18)),
            due_days: 15,
            currency: Currency::INR,
        }
    }
}
