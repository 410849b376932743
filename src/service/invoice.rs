//! Data behind the invoice pages: list, add-invoice form and submit, preview.

use crate::client::{HttpTransport, RestClient, Transport};
use crate::config::ClientConfig;
use crate::error::{AppError, ConfigError};
use crate::model::{Customer, Invoice, InvoiceDraft, InvoiceStatus, Notification};
use crate::service::DraftValidator;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

pub const INVOICES_ENDPOINT: &str = "/invoices";
pub const CLIENTS_ENDPOINT: &str = "/clients";
pub const NOTIFICATIONS_ENDPOINT: &str = "/notifications";
pub const INVOICE_NOTIFICATION_TYPE: &str = "invoice";

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub id: i64,
    pub number: String,
    pub client_id: i64,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
    pub total: f64,
}

impl From<&Invoice> for InvoiceRow {
    fn from(invoice: &Invoice) -> Self {
        InvoiceRow {
            id: invoice.id,
            number: invoice.number.clone(),
            client_id: invoice.client_id,
            issue_date: invoice.issue_date,
            due_date: invoice.due_date,
            status: invoice.status,
            total: invoice.total(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListView {
    pub invoices: Vec<InvoiceRow>,
    pub notifications: Vec<Notification>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddInvoiceView {
    pub customers: Vec<Customer>,
    pub issue_date: NaiveDate,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePreview {
    pub customer: Customer,
    pub invoice: Invoice,
    pub total: f64,
}

/// One client per backend collection, all sharing a single transport.
#[derive(Clone, Debug)]
pub struct InvoiceService {
    invoices: RestClient<Invoice>,
    customers: RestClient<Customer>,
    notifications: RestClient<Notification>,
}

impl InvoiceService {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let transport = HttpTransport::from_config(config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    pub fn with_transport(config: &ClientConfig, transport: Arc<dyn Transport>) -> Result<Self, ConfigError> {
        Ok(InvoiceService {
            invoices: RestClient::with_transport(config, INVOICES_ENDPOINT, Arc::clone(&transport))?,
            customers: RestClient::with_transport(config, CLIENTS_ENDPOINT, Arc::clone(&transport))?,
            notifications: RestClient::with_transport(config, NOTIFICATIONS_ENDPOINT, transport)?,
        })
    }

    /// Invoice list, optionally narrowed by name. Notifications are best effort:
    /// a failing notification feed leaves the list usable.
    pub async fn list(&self, name: Option<&str>) -> Result<InvoiceListView, AppError> {
        let invoices = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => self.invoices.get_by_name(name).await?,
            None => self.invoices.get_all().await?,
        };
        let notifications = match self.notifications.get_by_type(INVOICE_NOTIFICATION_TYPE).await {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(error = %e, "invoice notifications unavailable");
                Vec::new()
            }
        };
        Ok(InvoiceListView {
            invoices: invoices.iter().map(InvoiceRow::from).collect(),
            notifications,
        })
    }

    pub async fn add_invoice_form(&self) -> Result<AddInvoiceView, AppError> {
        let customers = self.customers.get_all().await?;
        Ok(AddInvoiceView {
            customers,
            issue_date: chrono::Utc::now().date_naive(),
        })
    }

    pub async fn submit(&self, draft: &InvoiceDraft) -> Result<Invoice, AppError> {
        DraftValidator::validate(draft)?;
        let created = self.invoices.create(draft).await?;
        tracing::info!(id = created.id, number = %created.number, "invoice created");
        Ok(created)
    }

    /// Preview for raw route parameters. Ids are parsed here, not by the router.
    pub async fn preview(&self, client_id: &str, invoice_id: &str) -> Result<InvoicePreview, AppError> {
        let client_id = parse_id("clientId", client_id)?;
        let invoice_id = parse_id("invoiceId", invoice_id)?;

        let (customer, invoice) = tokio::try_join!(
            self.customers.get_by_id(client_id),
            self.invoices.get_by_id(invoice_id)
        )?;
        if invoice.client_id != customer.id {
            return Err(AppError::NotFound(format!(
                "invoice {} for client {}",
                invoice_id, client_id
            )));
        }
        let total = invoice.total();
        Ok(InvoicePreview {
            customer,
            invoice,
            total,
        })
    }
}

fn parse_id(name: &str, raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid {}: {}", name, raw)))
}
