//! HTTP handlers for the invoice pages and the not-found fallback.

pub mod fallback;
pub mod invoice;
pub use fallback::*;
pub use invoice::*;
