//! Fetch a USGS earthquake GeoJSON feed and turn it into plain records.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - `data` - Immutable records and configuration ([`Record`], [`FetchOptions`])
//! - `core` - Pure transformations ([`build_url`], [`decode_to_text`], [`extract_records`])
//! - `effects` - The HTTP exchange behind the [`HttpClient`] trait
//!
//! # Contract
//!
//! The public pipeline never returns an error. Every failure is reported as one
//! `ERROR` event under the [`LOG_TAG`] target and degrades to a well-defined value:
//!
//! - a malformed URL or a failed request yields `None`
//! - a document that stops parsing partway yields the records read so far
//!
//! ```no_run
//! # async fn run() {
//! let records = quake_fetch::fetch_earthquake_data(quake_fetch::USGS_QUERY_URL).await;
//! for record in records.unwrap_or_default() {
//!     println!("{:?} {}", record.magnitude(), record.location());
//! }
//! # }
//! ```

mod core;
mod data;
mod effects;
mod error;

/// Tracing target shared by every diagnostic this crate emits.
pub const LOG_TAG: &str = "quake_fetch::query";

/// The USGS event query returning the ten most recent magnitude 6+ events.
pub const USGS_QUERY_URL: &str =
    "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&orderby=time&minmag=6&limit=10";

pub use crate::core::{TextDecoder, build_url, decode_to_text, extract_records};
pub use data::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, FetchOptions, LineMode, Record, Timeouts};
pub use effects::{BoxStream, HttpClient, Response, fetch_earthquake_data_with, perform_request};

#[cfg(feature = "reqwest")]
pub use effects::{ReqwestClient, fetch_earthquake_data, fetch_earthquake_data_blocking};

pub use error::{Error, ErrorKind, Result};
