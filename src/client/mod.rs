//! Generic typed REST client over a pluggable HTTP transport.

mod rest;
mod transport;
#[cfg(test)]
pub(crate) mod testing;

pub use rest::RestClient;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport, TransportError};
