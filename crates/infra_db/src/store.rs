//! PostgreSQL invoice store
//!
//! Adapter backing `domain_invoicing::InvoiceStore`. An invoice header and
//! its line items are written in a single transaction: either the whole
//! invoice lands or none of it does. The unique index on `invoice_number`
//! enforces business identity and reports collisions from the count-based
//! numbering scheme as duplicates.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use core_kernel::{Currency, DomainPort, InvoiceId, Money, PortError};
use domain_invoicing::{Invoice, InvoiceStore, InvoiceTotals, LineItem};

use crate::error::DatabaseError;

/// Invoice persistence over a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PostgresInvoiceStore {
    pool: PgPool,
}

impl PostgresInvoiceStore {
    /// Creates a new store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Verifies database connectivity with a trivial query
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;
        Ok(())
    }

    async fn insert(&self, invoice: &Invoice) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await.map_err(|e| DatabaseError::from(&e))?;

        sqlx::query(
            r#"
            INSERT INTO invoices (
                invoice_id, invoice_number, address, currency,
                sub_total, cgst, sgst, igst, gross_amount,
                issue_date, due_date, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(invoice.id.as_uuid())
        .bind(&invoice.invoice_number)
        .bind(&invoice.address)
        .bind(invoice.totals.sub_total.currency().code())
        .bind(invoice.totals.sub_total.amount())
        .bind(invoice.totals.cgst.amount())
        .bind(invoice.totals.sgst.amount())
        .bind(invoice.totals.igst.amount())
        .bind(invoice.totals.gross_amount.amount())
        .bind(invoice.issue_date)
        .bind(invoice.due_date)
        .bind(invoice.created_at)
        .bind(invoice.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        for (index, item) in invoice.items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO invoice_items (
                    item_id, invoice_id, line_no, description, quantity, rate, amount
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(invoice.id.as_uuid())
            .bind((index + 1) as i32)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(item.rate.amount())
            .bind(item.amount.amount())
            .execute(&mut *tx)
            .await
            .map_err(|e| DatabaseError::from(&e))?;
        }

        tx.commit().await.map_err(|e| DatabaseError::from(&e))?;
        debug!(invoice_number = %invoice.invoice_number, "invoice stored");
        Ok(())
    }

    async fn items_for(
        &self,
        invoice_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<ItemRow>>, DatabaseError> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            r#"
            SELECT invoice_id, line_no, description, quantity, rate, amount
            FROM invoice_items
            WHERE invoice_id = ANY($1)
            ORDER BY invoice_id, line_no
            "#,
        )
        .bind(invoice_ids.to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        let mut grouped: HashMap<Uuid, Vec<ItemRow>> = HashMap::new();
        for row in rows {
            grouped.entry(row.invoice_id).or_default().push(row);
        }
        Ok(grouped)
    }
}

#[async_trait]
impl InvoiceStore for PostgresInvoiceStore {
    async fn count(&self) -> Result<u64, PortError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        Ok(count.max(0) as u64)
    }

    async fn save(&self, invoice: &Invoice) -> Result<Invoice, PortError> {
        self.insert(invoice).await?;
        Ok(invoice.clone())
    }

    async fn list_all(&self) -> Result<Vec<Invoice>, PortError> {
        let rows: Vec<InvoiceRow> = sqlx::query_as(
            r#"
            SELECT invoice_id, invoice_number, address, currency,
                   sub_total, cgst, sgst, igst, gross_amount,
                   issue_date, due_date, created_at, updated_at
            FROM invoices
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        let ids: Vec<Uuid> = rows.iter().map(|r| r.invoice_id).collect();
        let mut items = self.items_for(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let item_rows = items.remove(&row.invoice_id).unwrap_or_default();
                row.into_domain(item_rows).map_err(PortError::from)
            })
            .collect()
    }

    async fn find_by_number(
        &self,
        invoice_number: &str,
    ) -> Result<Option<Invoice>, PortError> {
        let row: Option<InvoiceRow> = sqlx::query_as(
            r#"
            SELECT invoice_id, invoice_number, address, currency,
                   sub_total, cgst, sgst, igst, gross_amount,
                   issue_date, due_date, created_at, updated_at
            FROM invoices
            WHERE invoice_number = $1
            "#,
        )
        .bind(invoice_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        match row {
            None => Ok(None),
            Some(row) => {
                let mut items = self.items_for(&[row.invoice_id]).await?;
                let item_rows = items.remove(&row.invoice_id).unwrap_or_default();
                Ok(Some(row.into_domain(item_rows)?))
            }
        }
    }
}

impl DomainPort for PostgresInvoiceStore {}

/// Database row for an invoice header
#[derive(Debug, Clone, sqlx::FromRow)]
struct InvoiceRow {
    invoice_id: Uuid,
    invoice_number: String,
    address: String,
    currency: String,
    sub_total: Decimal,
    cgst: Decimal,
    sgst: Decimal,
    igst: Decimal,
    gross_amount: Decimal,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Database row for an invoice line item
#[derive(Debug, Clone, sqlx::FromRow)]
struct ItemRow {
    invoice_id: Uuid,
    line_no: i32,
    description: String,
    quantity: Decimal,
    rate: Decimal,
    amount: Decimal,
}

impl InvoiceRow {
    fn into_domain(self, item_rows: Vec<ItemRow>) -> Result<Invoice, DatabaseError> {
        let currency = Currency::from_code(&self.currency).ok_or_else(|| {
            DatabaseError::SerializationError(format!("unknown currency '{}'", self.currency))
        })?;

        let items = item_rows
            .into_iter()
            .map(|row| LineItem {
                serial_number: row.line_no.to_string(),
                description: row.description,
                quantity: row.quantity,
                rate: Money::new(row.rate, currency),
                amount: Money::new(row.amount, currency),
            })
            .collect();

        Ok(Invoice {
            id: InvoiceId::from_uuid(self.invoice_id),
            invoice_number: self.invoice_number,
            address: self.address,
            items,
            totals: InvoiceTotals {
                sub_total: Money::new(self.sub_total, currency),
                cgst: Money::new(self.cgst, currency),
                sgst: Money::new(self.sgst, currency),
                igst: Money::new(self.igst, currency),
                gross_amount: Money::new(self.gross_amount, currency),
            },
            issue_date: self.issue_date,
            due_date: self.due_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn header_row() -> InvoiceRow {
        InvoiceRow {
            invoice_id: Uuid::new_v4(),
            invoice_number: "DWPL/2025/0001".to_string(),
            address: "Patna, Bihar".to_string(),
            currency: "INR".to_string(),
            sub_total: dec!(250),
            cgst: dec!(22.5),
            sgst: dec!(22.5),
            igst: dec!(0),
            gross_amount: dec!(295),
            issue_date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn row_maps_back_to_domain_invoice() {
        let row = header_row();
        let invoice_id = row.invoice_id;
        let items = vec![ItemRow {
            invoice_id,
            line_no: 1,
            description: "Development".to_string(),
            quantity: dec!(2),
            rate: dec!(100),
            amount: dec!(200),
        }];

        let invoice = row.into_domain(items).unwrap();

        assert_eq!(invoice.invoice_number, "DWPL/2025/0001");
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].serial_number, "1");
        assert_eq!(invoice.items[0].amount.amount(), dec!(200));
        assert_eq!(invoice.totals.gross_amount.amount(), dec!(295));
        assert_eq!(invoice.totals.sub_total.currency(), Currency::INR);
    }

    #[test]
    fn unknown_currency_is_a_serialization_error() {
        let mut row = header_row();
        row.currency = "ZZZ".to_string();

        let err = row.into_domain(Vec::new()).unwrap_err();
        assert!(matches!(err, DatabaseError::SerializationError(_)));
    }
}
