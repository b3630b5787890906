//! Test Data Builders
//!
//! Builder for constructing invoices in tests with sensible defaults, so a
//! test specifies only the fields it cares about.

use chrono::{DateTime, Utc};

use domain_invoicing::{create_invoice, Invoice, InvoicingConfig, LineItemDraft};

use crate::fixtures::{AddressFixtures, ItemFixtures, TemporalFixtures};

/// Builder for constructing test invoices
pub struct TestInvoiceBuilder {
    address: String,
    drafts: Vec<LineItemDraft>,
    prior_count: u64,
    now: DateTime<Utc>,
    config: InvoicingConfig,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceBuilder {
    /// Creates a new builder with default values (home-state address,
    /// standard items, count 0, fixed submission time)
    pub fn new() -> Self {
        Self {
            address: AddressFixtures::home_state().to_string(),
            drafts: ItemFixtures::standard_drafts(),
            prior_count: 0,
            now: TemporalFixtures::submission_moment(),
            config: InvoicingConfig::default(),
        }
    }

    /// Sets the billing address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the draft rows
    pub fn with_drafts(mut self, drafts: Vec<LineItemDraft>) -> Self {
        self.drafts = drafts;
        self
    }

    /// Sets the prior invoice count the numbering sees
    pub fn with_prior_count(mut self, prior_count: u64) -> Self {
        self.prior_count = prior_count;
        self
    }

    /// Sets the submission timestamp
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Sets the invoicing configuration
    pub fn with_config(mut self, config: InvoicingConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the invoice through the real aggregate path
    pub fn build(self) -> Invoice {
        create_invoice(
            &self.drafts,
            &self.address,
            self.prior_count,
            self.now,
            &self.config,
        )
        .expect("test builder produced an invalid invoice")
    }
}
