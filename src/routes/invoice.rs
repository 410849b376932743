//! Route table for the invoice pages.

use crate::handlers::{add_invoice_form, add_invoice_submit, invoice_list, invoice_preview};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const INVOICES_PATH: &str = "/workshop/invoices";
pub const ADD_INVOICE_PATH: &str = "/workshop/invoices/add-invoice";
pub const INVOICE_PREVIEW_PATH: &str = "/workshop/invoices/invoice-preview/:clientId/:invoiceId";

pub fn invoice_routes(state: AppState) -> Router {
    Router::new()
        .route(INVOICES_PATH, get(invoice_list))
        .route(ADD_INVOICE_PATH, get(add_invoice_form).post(add_invoice_submit))
        .route(INVOICE_PREVIEW_PATH, get(invoice_preview))
        .with_state(state)
}
