//! Invoicing Domain Ports
//!
//! The `InvoiceStore` trait defines everything the invoicing domain needs
//! from its persistence collaborator. Adapters implement it:
//!
//! - **Internal adapter**: PostgreSQL (`infra_db::PostgresInvoiceStore`)
//! - **In-memory adapter**: for tests (`test_utils::InMemoryInvoiceStore`)
//!
//! Adapters are chosen at application startup and injected where the
//! domain is used; the domain never constructs one.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::invoice::Invoice;

/// Persistence port for invoices
#[async_trait]
pub trait InvoiceStore: DomainPort {
    /// Number of invoices currently stored.
    ///
    /// Feeds the numbering policy as `prior_count`. Reading the count and
    /// inserting are separate operations, so concurrent submissions can
    /// observe the same count; [`save`](Self::save) surfaces the resulting
    /// collision as a conflict.
    async fn count(&self) -> Result<u64, PortError>;

    /// Persists an invoice and returns the stored record.
    ///
    /// Must enforce `invoice_number` uniqueness and report a violation as
    /// [`PortError::Conflict`]. Implementations do not retry with a fresh
    /// number; retry policy belongs to the caller.
    async fn save(&self, invoice: &Invoice) -> Result<Invoice, PortError>;

    /// All stored invoices, newest first.
    async fn list_all(&self) -> Result<Vec<Invoice>, PortError>;

    /// Looks up a single invoice by its business identity.
    async fn find_by_number(&self, invoice_number: &str)
        -> Result<Option<Invoice>, PortError>;
}
