//! Pre-built test data for common entities

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal_macros::dec;

use domain_invoicing::LineItemDraft;

/// Billing addresses for both tax branches
pub struct AddressFixtures;

impl AddressFixtures {
    /// Address inside the seller's home state (CGST + SGST branch)
    pub fn home_state() -> &'static str {
        "12 Fraser Road, Patna, Bihar 800001"
    }

    /// Address outside the home state (IGST branch)
    pub fn out_of_state() -> &'static str {
        "Nariman Point, Mumbai, Maharashtra 400021"
    }
}

/// Line-item sets with known totals
pub struct ItemFixtures;

impl ItemFixtures {
    /// Two rows summing to 250.00 (2 x 100 + 1 x 50)
    pub fn standard_drafts() -> Vec<LineItemDraft> {
        vec![
            LineItemDraft::new("Website development", dec!(2), dec!(100)),
            LineItemDraft::new("Annual hosting", dec!(1), dec!(50)),
        ]
    }

    /// A single zero-amount row (valid degenerate invoice)
    pub fn zero_drafts() -> Vec<LineItemDraft> {
        vec![LineItemDraft::new("Placeholder", dec!(0), dec!(0))]
    }
}

/// Fixed timestamps for deterministic numbering and due dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// 2025-01-20T10:00:00Z - due date lands on 2025-02-04
    pub fn submission_moment() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2025, 1, 20)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
            .and_utc()
    }
}
