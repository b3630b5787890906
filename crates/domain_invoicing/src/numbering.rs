//! Invoice numbering policy
//!
//! Invoice numbers are `<PREFIX>/<year>/<sequence>` with the sequence
//! derived from the count of invoices already stored. The function is pure
//! given its inputs; obtaining the prior count is the store's concern.
//!
//! Count-then-insert numbering is racy: two submissions observing the same
//! count mint the same number. That scheme is kept deliberately; the
//! store's unique index on `invoice_number` is the backstop and turns a
//! lost race into a conflict error for the caller to handle.

use chrono::{Datelike, NaiveDate};

/// Derives the next sequential invoice number.
///
/// The sequence is `prior_count + 1`, zero-padded to a minimum of four
/// digits. Past 9999 the field widens (`PREFIX/2025/10000`) rather than
/// truncating or rolling over, so numbers stay unique and sortable.
pub fn next_invoice_number(prefix: &str, prior_count: u64, on: NaiveDate) -> String {
    let sequence = prior_count + 1;
    format!("{}/{}/{:04}", prefix, on.year(), sequence)
}
