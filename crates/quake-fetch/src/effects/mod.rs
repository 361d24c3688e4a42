//! I/O operations: the HTTP exchange and the composite fetch.
//!
//! The pure stages in [`crate::core`] are driven from here. The network is
//! reached only through [`HttpClient`], so tests can substitute a mock.

mod http;
mod pipeline;

pub use http::{BoxStream, HttpClient, Response};
pub use pipeline::{fetch_earthquake_data_with, perform_request};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
#[cfg(feature = "reqwest")]
pub use pipeline::{fetch_earthquake_data, fetch_earthquake_data_blocking};
