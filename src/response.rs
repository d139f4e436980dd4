use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::Error;

/// An owned snapshot of an HTTP response: status, headers and the fully
/// drained body.
///
/// The client hands this back verbatim on success and attaches it to the
/// error on HTTP failures; it never interprets the body itself.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ApiResponse {
    pub(crate) const fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// The HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw response body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The response body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the body is not valid UTF-8.
    pub fn text(&self) -> Result<&str, Error> {
        std::str::from_utf8(&self.body)
            .map_err(|e| Error::InvalidArgument(format!("response body is not valid UTF-8: {e}")))
    }

    /// Decodes the response body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the body is not valid UTF-8 or
    /// not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        crate::json::decode_as(self.text()?)
    }
}
