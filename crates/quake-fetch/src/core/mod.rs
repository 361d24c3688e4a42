//! Core layer: pure transformations.
//!
//! URL building and extraction each have a fallible form returning
//! [`crate::Result`] and a public form that logs the failure under
//! [`crate::LOG_TAG`] and degrades. Decoding cannot fail.

mod decode;
mod endpoint;
mod extract;

pub use decode::{TextDecoder, decode_to_text};
pub use endpoint::build_url;
pub use extract::extract_records;
