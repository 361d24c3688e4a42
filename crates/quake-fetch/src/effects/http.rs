use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;
use url::Url;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Status line and body of a response.
///
/// The body owns the underlying connection; dropping the response releases
/// it whether or not the body was read.
pub struct Response<E> {
    pub status: u16,
    pub body:   BoxStream<'static, std::result::Result<Bytes, E>>,
}

impl<E> std::fmt::Debug for Response<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("body", &"{ ... }")
            .finish()
    }
}

/// Asynchronous HTTP client abstraction.
///
/// The pipeline only needs a plain GET. Implementations own their timeout
/// configuration and report a response for any status; the status check
/// happens in the pipeline.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + 'static;

    /// Send a GET with no headers and no body.
    ///
    /// Errors are connection-level failures (DNS, refused, connect timeout).
    /// Failures while reading surface as errors in the body stream.
    fn get(
        &self,
        url: &Url,
    ) -> impl Future<Output = std::result::Result<Response<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::data::Timeouts;

    /// Production HTTP client implementation using reqwest.
    ///
    /// Idle connections are not pooled, so each fetch opens and closes its own.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new(timeouts: &Timeouts) -> Result<Self, reqwest::Error> {
            let client = reqwest::Client::builder()
                .connect_timeout(timeouts.connect)
                .read_timeout(timeouts.read)
                .pool_max_idle_per_host(0)
                .build()?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &Url) -> Result<Response<Self::Error>, Self::Error> {
            let response = self.client.get(url.clone()).send().await?;
            let status = response.status().as_u16();

            Ok(Response {
                status,
                body: Box::pin(response.bytes_stream()),
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn builds_with_default_timeouts() {
            assert!(ReqwestClient::new(&Timeouts::default()).is_ok());
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
