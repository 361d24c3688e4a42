//! Immutable data types for the fetch pipeline.
//!
//! Records produced by extraction and the options that configure a fetch.
//! Nothing here performs I/O.

pub mod options;
pub mod record;

pub use options::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, FetchOptions, LineMode, Timeouts};
pub use record::Record;
