//! Invoice page handlers: list, add-invoice (form and submit), preview.

use crate::error::AppError;
use crate::model::InvoiceDraft;
use crate::response::{page_view, success_one};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

pub const INVOICE_LIST_PAGE: &str = "invoice-list";
pub const ADD_INVOICE_PAGE: &str = "add-invoice";
pub const INVOICE_PREVIEW_PAGE: &str = "invoice-preview";

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub name: Option<String>,
}

/// Raw preview path parameters, in route order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewParams {
    pub client_id: String,
    pub invoice_id: String,
}

pub async fn invoice_list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.invoices.list(params.name.as_deref()).await?;
    Ok(page_view(INVOICE_LIST_PAGE, view))
}

pub async fn add_invoice_form(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let view = state.invoices.add_invoice_form().await?;
    Ok(page_view(ADD_INVOICE_PAGE, view))
}

pub async fn add_invoice_submit(
    State(state): State<AppState>,
    Json(draft): Json<InvoiceDraft>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.invoices.submit(&draft).await?;
    Ok(success_one(created))
}

pub async fn invoice_preview(
    State(state): State<AppState>,
    Path(params): Path<PreviewParams>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(client_id = %params.client_id, invoice_id = %params.invoice_id, "preview");
    let view = state
        .invoices
        .preview(&params.client_id, &params.invoice_id)
        .await?;
    Ok(page_view(INVOICE_PREVIEW_PAGE, view))
}
