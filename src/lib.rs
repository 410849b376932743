//! Invoice portal: invoice pages backed by a generic typed REST client.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use client::{HttpTransport, RestClient, Transport};
pub use config::{load_from_env, load_with, AppConfig, ClientConfig, ServerConfig};
pub use error::{AppError, ClientError, ConfigError, GENERIC_REQUEST_ERROR};
pub use model::{Customer, Invoice, InvoiceDraft, InvoiceItem, Notification};
pub use response::{error_body, page_view, success_one};
pub use routes::{app, common_routes, invoice_routes};
pub use service::InvoiceService;
pub use state::AppState;
