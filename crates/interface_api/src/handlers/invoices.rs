//! Invoice handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Utc;
use validator::Validate;

use domain_invoicing::{create_invoice as build_invoice, next_invoice_number};

use crate::dto::invoices::*;
use crate::render::render_invoice;
use crate::{error::ApiError, AppState};

/// Creates and persists an invoice
///
/// Reads the current invoice count, assembles the aggregate (validation,
/// totals, numbering, due date), and saves it. A lost numbering race shows
/// up here as a 409 from the store; the caller decides whether to resubmit.
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceResponse>), ApiError> {
    request.validate()?;

    let prior_count = state.store.count().await?;
    let invoice = build_invoice(
        &request.to_drafts(),
        &request.address,
        prior_count,
        Utc::now(),
        &state.config.invoicing,
    )?;

    let stored = state.store.save(&invoice).await?;
    tracing::info!(invoice_number = %stored.invoice_number, "invoice created");

    Ok((
        StatusCode::CREATED,
        Json(InvoiceResponse::from_domain(&stored, &state.config.invoicing)),
    ))
}

/// Lists all invoices, newest first
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<Vec<InvoiceResponse>>, ApiError> {
    let invoices = state.store.list_all().await?;
    let responses = invoices
        .iter()
        .map(|invoice| InvoiceResponse::from_domain(invoice, &state.config.invoicing))
        .collect();
    Ok(Json(responses))
}

/// Returns the bare count of stored invoices
pub async fn invoice_count(State(state): State<AppState>) -> Result<Json<u64>, ApiError> {
    Ok(Json(state.store.count().await?))
}

/// Returns the number the next submission would be stamped with
///
/// Form prefill only; the authoritative number is minted again at
/// submission time from a fresh count.
pub async fn next_number(
    State(state): State<AppState>,
) -> Result<Json<NextNumberResponse>, ApiError> {
    let prior_count = state.store.count().await?;
    let invoice_number = next_invoice_number(
        &state.config.invoicing.number_prefix,
        prior_count,
        Utc::now().date_naive(),
    );

    Ok(Json(NextNumberResponse {
        invoice_number,
        prior_count,
    }))
}

/// Gets an invoice by its number
///
/// The number contains slashes, so the path parameter arrives
/// percent-encoded (`DWPL%2F2025%2F0001`).
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let invoice = state
        .store
        .find_by_number(&number)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("invoice '{}' not found", number)))?;

    Ok(Json(InvoiceResponse::from_domain(
        &invoice,
        &state.config.invoicing,
    )))
}

/// Renders the print-styled invoice page
pub async fn print_invoice(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Html<String>, ApiError> {
    let invoice = state
        .store
        .find_by_number(&number)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("invoice '{}' not found", number)))?;

    let html = render_invoice(&state.templates, &invoice, &state.config)?;
    Ok(Html(html))
}
