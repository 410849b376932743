//! Records exchanged with the invoice backend. Display only; the client never validates them.

mod customer;
mod invoice;
mod notification;

pub use customer::Customer;
pub use invoice::{Invoice, InvoiceDraft, InvoiceItem, InvoiceStatus};
pub use notification::Notification;
