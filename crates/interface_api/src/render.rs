//! Print-view rendering
//!
//! Renders the print-styled invoice page from an embedded minijinja
//! template. The template receives the display-formatted invoice (two
//! decimal places, DD-MM-YYYY dates) plus the seller letterhead.

use minijinja::context;

use domain_invoicing::Invoice;

use crate::config::ApiConfig;
use crate::dto::invoices::InvoiceResponse;

/// Builds the template environment with the embedded invoice template
pub fn setup_template_env() -> Result<minijinja::Environment<'static>, minijinja::Error> {
    let mut env = minijinja::Environment::new();
    env.add_template("invoice.html", include_str!("../templates/invoice.html"))?;
    Ok(env)
}

/// Renders the print page for one invoice
pub fn render_invoice(
    env: &minijinja::Environment<'static>,
    invoice: &Invoice,
    config: &ApiConfig,
) -> Result<String, minijinja::Error> {
    let template = env.get_template("invoice.html")?;
    template.render(context! {
        invoice => InvoiceResponse::from_domain(invoice, &config.invoicing),
        seller => config.seller.clone(),
        cgst_pct => config.invoicing.cgst_rate.as_percentage().to_string(),
        sgst_pct => config.invoicing.sgst_rate.as_percentage().to_string(),
        igst_pct => config.invoicing.igst_rate.as_percentage().to_string(),
    })
}
