//! API configuration

use domain_invoicing::InvoicingConfig;
use serde::{Deserialize, Serialize};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// Invoicing business constants (rates, prefix, home state, due days)
    pub invoicing: InvoicingConfig,
    /// Seller letterhead shown on the printed invoice
    pub seller: SellerProfile,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/invoicing".to_string(),
            log_level: "info".to_string(),
            invoicing: InvoicingConfig::default(),
            seller: SellerProfile::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    ///
    /// Variables use the `API_` prefix with `__` separating nested fields,
    /// e.g. `API_PORT=8080` or `API_INVOICING__NUMBER_PREFIX=ACME`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("API")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Seller identity printed on the invoice letterhead
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// GST registration number
    pub gstin: String,
}

impl Default for SellerProfile {
    fn default() -> Self {
        Self {
            name: "Example Websoft Pvt. Ltd.".to_string(),
            address: "Patna, Bihar 800001 IN".to_string(),
            phone: "0000000000".to_string(),
            email: "billing@example.in".to_string(),
            gstin: "10XXXXX0000X0XX".to_string(),
        }
    }
}
