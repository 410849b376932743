//! Router assembly: common routes, invoice pages, not-found fallback.

mod common;
mod invoice;

pub use common::common_routes;
pub use invoice::{invoice_routes, ADD_INVOICE_PATH, INVOICES_PATH, INVOICE_PREVIEW_PATH};

use crate::handlers::not_found;
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full page application. Paths outside the table fall through to a JSON 404.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(invoice_routes(state))
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
