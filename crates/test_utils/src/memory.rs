//! In-memory invoice store
//!
//! Mock adapter behind `domain_invoicing::InvoiceStore` for tests that need
//! persistence behavior without a database. Enforces invoice-number
//! uniqueness the same way the PostgreSQL adapter's unique index does.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};
use domain_invoicing::{Invoice, InvoiceStore};

/// Invoice store backed by a mutex-guarded vector
#[derive(Debug, Default)]
pub struct InMemoryInvoiceStore {
    invoices: Mutex<Vec<Invoice>>,
    /// When set, `count()` always reports this value. Lets tests reproduce
    /// the stale-count read behind the numbering race deterministically.
    frozen_count: Option<u64>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with invoices
    pub fn seeded(invoices: Vec<Invoice>) -> Self {
        Self {
            invoices: Mutex::new(invoices),
            frozen_count: None,
        }
    }

    /// Pins the value `count()` reports, regardless of stored invoices
    pub fn with_frozen_count(mut self, count: u64) -> Self {
        self.frozen_count = Some(count);
        self
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Invoice>> {
        self.invoices.lock().expect("invoice store mutex poisoned")
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn count(&self) -> Result<u64, PortError> {
        if let Some(count) = self.frozen_count {
            return Ok(count);
        }
        Ok(self.lock().len() as u64)
    }

    async fn save(&self, invoice: &Invoice) -> Result<Invoice, PortError> {
        let mut invoices = self.lock();
        if invoices
            .iter()
            .any(|stored| stored.invoice_number == invoice.invoice_number)
        {
            return Err(PortError::conflict(format!(
                "invoice with number '{}' already exists",
                invoice.invoice_number
            )));
        }
        invoices.push(invoice.clone());
        Ok(invoice.clone())
    }

    async fn list_all(&self) -> Result<Vec<Invoice>, PortError> {
        // Insertion order reversed: newest first, like the SQL ORDER BY
        Ok(self.lock().iter().rev().cloned().collect())
    }

    async fn find_by_number(
        &self,
        invoice_number: &str,
    ) -> Result<Option<Invoice>, PortError> {
        Ok(self
            .lock()
            .iter()
            .find(|stored| stored.invoice_number == invoice_number)
            .cloned())
    }
}

impl DomainPort for InMemoryInvoiceStore {}
