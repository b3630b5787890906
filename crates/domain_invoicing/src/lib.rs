//! Invoicing Domain - GST invoice composition
//!
//! This crate implements the business rules of invoice creation:
//!
//! - **Line items**: draft rows are normalized explicitly - amounts derived
//!   from quantity × rate and serial numbers from position, always together.
//! - **Totals**: the jurisdiction substring test picks the tax branch,
//!   CGST + SGST in-state or IGST out-of-state, over full-precision money.
//! - **Numbering**: sequential `PREFIX/year/0001`-style numbers derived
//!   from the stored-invoice count.
//! - **Aggregate**: [`create_invoice`] composes the above with the
//!   calendar-day due-date rule into a persistable [`Invoice`].
//!
//! Everything here is pure and synchronous; persistence happens behind the
//! [`ports::InvoiceStore`] port that the surrounding application injects.

pub mod config;
pub mod error;
pub mod invoice;
pub mod line_item;
pub mod numbering;
pub mod ports;
pub mod totals;

pub use config::InvoicingConfig;
pub use error::InvoicingError;
pub use invoice::{create_invoice, Invoice};
pub use line_item::{add_item, normalize, remove_item, LineItem, LineItemDraft};
pub use numbering::next_invoice_number;
pub use ports::InvoiceStore;
pub use totals::{InvoiceTotals, Jurisdiction};
