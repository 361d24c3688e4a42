use futures_util::StreamExt;
use tracing::{debug, error};
use url::Url;

use crate::LOG_TAG;
use crate::core::{TextDecoder, build_url, extract_records};
use crate::data::{FetchOptions, LineMode, Record};
use crate::effects::http::HttpClient;
use crate::error::{Error, Result};

/// Perform one GET and return the body text.
///
/// A `None` URL returns empty text without touching the network. A status
/// other than 200, a connection failure, or a read failure is logged and also
/// yields empty text. The response is dropped before returning on every path,
/// which releases its connection.
pub async fn perform_request<C: HttpClient>(
    client: &C,
    url: Option<&Url>,
    options: &FetchOptions,
) -> String {
    let Some(url) = url else {
        return String::new();
    };

    match read_body(client, url, options.line_mode).await {
        Ok(text) => text,
        Err(e) => {
            error!(
                target: LOG_TAG,
                url = %url,
                kind = ?e.kind(),
                error = %e,
                "problem retrieving the earthquake JSON result"
            );
            String::new()
        }
    }
}

async fn read_body<C: HttpClient>(client: &C, url: &Url, line_mode: LineMode) -> Result<String> {
    let response = client.get(url).await.map_err(Error::network)?;
    if response.status != 200 {
        return Err(Error::Status(response.status));
    }

    let mut body = response.body;
    let mut decoder = TextDecoder::new(line_mode);
    while let Some(chunk) = body.next().await {
        decoder.push(&chunk.map_err(Error::network)?);
    }
    Ok(decoder.finish())
}

/// Run the whole pipeline over `client`.
///
/// Returns `None` when the URL is malformed or no body text was received, and
/// otherwise whatever [`extract_records`] produced. The timeouts in `options`
/// are not applied here; they belong to the client.
pub async fn fetch_earthquake_data_with<C: HttpClient>(
    client: &C,
    request_url: &str,
    options: &FetchOptions,
) -> Option<Vec<Record>> {
    let url = build_url(request_url);
    let text = perform_request(client, url.as_ref(), options).await;
    let records = extract_records(Some(text.as_str()));

    if let Some(records) = &records {
        debug!(target: LOG_TAG, url = request_url, count = records.len(), "fetched earthquake data");
    }
    records
}

/// Query an earthquake feed and return its records.
///
/// Builds a [`ReqwestClient`](crate::ReqwestClient) with the default 15 s
/// connect and 10 s read timeouts. Never fails; see the crate docs for what
/// each failure degrades to.
#[cfg(feature = "reqwest")]
pub async fn fetch_earthquake_data(request_url: &str) -> Option<Vec<Record>> {
    let options = FetchOptions::default();
    let client = match crate::effects::http::ReqwestClient::new(&options.timeouts) {
        Ok(client) => client,
        Err(e) => {
            let e = Error::network(e);
            error!(target: LOG_TAG, error = %e, "problem creating the HTTP client");
            return None;
        }
    };

    fetch_earthquake_data_with(&client, request_url, &options).await
}

/// Blocking form of [`fetch_earthquake_data`].
///
/// Drives the fetch on a private current-thread runtime. Called from inside a
/// Tokio runtime it logs and returns `None` instead of blocking that runtime.
#[cfg(feature = "reqwest")]
pub fn fetch_earthquake_data_blocking(request_url: &str) -> Option<Vec<Record>> {
    if tokio::runtime::Handle::try_current().is_ok() {
        let e = Error::Runtime(std::io::Error::other("called from inside an async runtime"));
        error!(target: LOG_TAG, url = request_url, error = %e, "problem starting the fetch");
        return None;
    }

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            let e = Error::Runtime(e);
            error!(target: LOG_TAG, error = %e, "problem starting the fetch");
            return None;
        }
    };

    runtime.block_on(fetch_earthquake_data(request_url))
}
