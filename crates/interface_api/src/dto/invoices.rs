//! Invoice DTOs
//!
//! The response DTOs are the display boundary: monetary fields leave here
//! as strings with exactly two decimals and dates as DD-MM-YYYY, while the
//! stored domain values keep their full precision.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::temporal::format_display_date;
use domain_invoicing::{Invoice, InvoicingConfig, LineItem, LineItemDraft};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "at least one line item is required"))]
    pub items: Vec<LineItemRequest>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LineItemRequest {
    /// Ignored if supplied; serials are assigned by position
    #[serde(default)]
    pub serial_number: Option<String>,
    pub description: String,
    pub quantity: Decimal,
    pub rate: Decimal,
}

impl CreateInvoiceRequest {
    /// Converts the request rows into domain drafts
    pub fn to_drafts(&self) -> Vec<LineItemDraft> {
        self.items
            .iter()
            .map(|item| LineItemDraft::new(item.description.clone(), item.quantity, item.rate))
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct LineItemResponse {
    pub serial_number: String,
    pub description: String,
    pub quantity: Decimal,
    pub rate: String,
    pub amount: String,
}

impl LineItemResponse {
    fn from_domain(item: &LineItem) -> Self {
        Self {
            serial_number: item.serial_number.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            rate: item.rate.display_amount(),
            amount: item.amount.display_amount(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub id: Uuid,
    pub invoice_number: String,
    pub address: String,
    pub items: Vec<LineItemResponse>,
    pub sub_total: String,
    pub cgst: String,
    pub sgst: String,
    pub igst: String,
    pub gross_amount: String,
    pub currency: String,
    /// Label shown beside the IGST field ("Bihar" vs "Other")
    pub jurisdiction: String,
    pub issue_date: String,
    pub due_date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InvoiceResponse {
    pub fn from_domain(invoice: &Invoice, config: &InvoicingConfig) -> Self {
        let jurisdiction = if invoice.jurisdiction(config).is_home_state() {
            config.home_state_label.clone()
        } else {
            "Other".to_string()
        };

        Self {
            id: *invoice.id.as_uuid(),
            invoice_number: invoice.invoice_number.clone(),
            address: invoice.address.clone(),
            items: invoice.items.iter().map(LineItemResponse::from_domain).collect(),
            sub_total: invoice.totals.sub_total.display_amount(),
            cgst: invoice.totals.cgst.display_amount(),
            sgst: invoice.totals.sgst.display_amount(),
            igst: invoice.totals.igst.display_amount(),
            gross_amount: invoice.totals.gross_amount.display_amount(),
            currency: invoice.totals.sub_total.currency().code().to_string(),
            jurisdiction,
            issue_date: format_display_date(invoice.issue_date),
            due_date: format_display_date(invoice.due_date),
            created_at: invoice.created_at,
            updated_at: invoice.updated_at,
        }
    }
}

/// Body for `GET /api/v1/invoices/next-number`
#[derive(Debug, Serialize)]
pub struct NextNumberResponse {
    pub invoice_number: String,
    pub prior_count: u64,
}
