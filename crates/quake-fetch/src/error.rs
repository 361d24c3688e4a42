//! Error types for quake-fetch.

use std::io;

use thiserror::Error;

/// Coarse classification of a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request text could not be turned into an HTTP(S) URL.
    MalformedUrl,
    /// Connecting, a non-200 status, or reading the body failed.
    Network,
    /// The body was not a feed document of the expected shape.
    Parse,
    /// The blocking entry point could not start its runtime.
    Runtime,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("problem building the URL '{input}': {source}")]
    MalformedUrl { input: String, source: url::ParseError },

    #[error("unsupported URL scheme '{scheme}', expected http or https")]
    UnsupportedScheme { scheme: String },

    #[error("error response code: {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an object at {path}")]
    NotAnObject { path: String },

    #[error("expected an array at {path}")]
    NotAnArray { path: String },

    #[error("missing key '{key}' at {path}")]
    MissingKey { path: String, key: &'static str },

    #[error("key '{key}' at {path} is not {expected}")]
    WrongType {
        path: String,
        key: &'static str,
        expected: &'static str,
    },

    #[error("failed to start the blocking runtime: {0}")]
    Runtime(#[source] io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedUrl { .. } | Error::UnsupportedScheme { .. } => ErrorKind::MalformedUrl,
            Error::Status(_) | Error::Network(_) => ErrorKind::Network,
            Error::Json(_)
            | Error::NotAnObject { .. }
            | Error::NotAnArray { .. }
            | Error::MissingKey { .. }
            | Error::WrongType { .. } => ErrorKind::Parse,
            Error::Runtime(_) => ErrorKind::Runtime,
        }
    }

    /// Network error carrying `e` and every cause below it, joined by `: `.
    pub(crate) fn network<E: std::error::Error>(e: E) -> Self {
        let mut message = e.to_string();
        let mut source = e.source();
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.ends_with(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }
        Error::Network(message)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
