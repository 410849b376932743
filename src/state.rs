//! Shared application state for all routes. Built once, read-only afterwards.

use crate::config::ClientConfig;
use crate::error::ConfigError;
use crate::service::InvoiceService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub invoices: Arc<InvoiceService>,
}

impl AppState {
    pub fn new(service: InvoiceService) -> Self {
        AppState {
            invoices: Arc::new(service),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(InvoiceService::new(config)?))
    }
}
