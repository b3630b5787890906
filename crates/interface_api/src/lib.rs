//! HTTP API Layer
//!
//! This crate provides the REST API for the invoicing system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: invoice creation, listing, count, lookup, print view
//! - **Middleware**: request logging and tracing
//! - **DTOs**: request/response objects carrying the display formatting
//! - **Rendering**: print-styled invoice HTML via minijinja
//!
//! Handlers talk to persistence exclusively through the injected
//! `InvoiceStore` port, so the same router serves PostgreSQL in production
//! and the in-memory store in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(store, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_invoicing::InvoiceStore;

use crate::config::ApiConfig;
use crate::handlers::{health, invoices};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InvoiceStore>,
    pub config: ApiConfig,
    pub templates: Arc<minijinja::Environment<'static>>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Invoice persistence port (PostgreSQL in production)
/// * `config` - API configuration
pub fn create_router(store: Arc<dyn InvoiceStore>, config: ApiConfig) -> Router {
    let templates = Arc::new(
        render::setup_template_env().expect("embedded invoice template must parse"),
    );
    let state = AppState {
        store,
        config,
        templates,
    };

    // Public routes (no request logging noise)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Invoice routes
    let invoice_routes = Router::new()
        .route(
            "/",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        .route("/count", get(invoices::invoice_count))
        .route("/next-number", get(invoices::next_number))
        .route("/:number", get(invoices::get_invoice))
        .route("/:number/print", get(invoices::print_invoice));

    let api_routes = Router::new()
        .nest("/invoices", invoice_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
