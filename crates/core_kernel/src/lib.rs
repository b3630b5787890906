//! Core Kernel - Foundational types and utilities for the invoicing system
//!
//! This crate provides the fundamental building blocks used across all
//! domain modules:
//! - Money types with precise decimal arithmetic
//! - Calendar-date helpers for issue/due dates
//! - Common identifiers and the port error type

pub mod identifiers;
pub mod money;
pub mod ports;
pub mod temporal;

pub use identifiers::{InvoiceId, LineItemId};
pub use money::{Currency, Money, MoneyError, Rate};
pub use ports::{DomainPort, PortError};
