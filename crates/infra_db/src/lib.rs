//! Database Infrastructure Layer
//!
//! PostgreSQL persistence for the invoicing system:
//!
//! - **Pool**: connection pool configuration and creation (SQLx)
//! - **Store**: [`PostgresInvoiceStore`], the internal adapter behind
//!   `domain_invoicing::InvoiceStore`
//! - **Errors**: database error taxonomy with PostgreSQL error-code
//!   mapping, converted onto the domain's port errors
//!
//! Schema lives in `migrations/` and is applied externally.

pub mod error;
pub mod pool;
pub mod store;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use store::PostgresInvoiceStore;
