//! Page-facing services built on the generic REST client.

mod invoice;
mod validation;
pub use invoice::{
    AddInvoiceView, InvoiceListView, InvoicePreview, InvoiceRow, InvoiceService, CLIENTS_ENDPOINT,
    INVOICES_ENDPOINT, INVOICE_NOTIFICATION_TYPE, NOTIFICATIONS_ENDPOINT,
};
pub use validation::DraftValidator;
