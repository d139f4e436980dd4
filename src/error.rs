use reqwest::Method;
use thiserror::Error;

use crate::response::ApiResponse;

/// Fallback message when a failed response carries no usable diagnostics.
pub(crate) const DEFAULT_API_ERROR_MESSAGE: &str = "An API error occurred";

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid input to a pure helper: a JSON codec failure, an empty
    /// endpoint, an empty query parameter key, or credentials that cannot
    /// be turned into request headers.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A network call failed, either because the service rejected it or
    /// because the request never reached the service. See
    /// [`ApiClientError::has_response`] for which of the two it was.
    #[error(transparent)]
    ApiClient(#[from] ApiClientError),
}

/// Method and URL of a dispatched request.
///
/// Headers are deliberately not captured so that credentials never travel
/// inside error values.
#[derive(Debug, Clone)]
pub struct RequestInfo {
    method: Method,
    url: String,
}

impl RequestInfo {
    pub(crate) fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }

    /// The HTTP method of the request.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// The full URL the request was sent to, including any query string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for RequestInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// The error for any failed API call.
///
/// Comes in two flavors: with a response attached (the service answered
/// with a status of 400 or above) or without one (the request never
/// completed, e.g. the connection was refused).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiClientError {
    request: RequestInfo,
    response: Option<ApiResponse>,
    message: String,
    code: u16,
    #[source]
    source: Option<reqwest::Error>,
}

impl ApiClientError {
    /// Builds the transport flavor: the request never yielded a response.
    ///
    /// The error code is 0. If the supplied reason is empty, the wrapped
    /// transport error's message is used instead, falling back to a generic
    /// default.
    pub(crate) fn from_request_and_reason(
        request: RequestInfo,
        reason: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        let mut message = reason.into();
        if message.is_empty() {
            message = source
                .as_ref()
                .map_or_else(|| DEFAULT_API_ERROR_MESSAGE.to_owned(), ToString::to_string);
        }

        Self {
            request,
            response: None,
            message,
            code: 0,
            source,
        }
    }

    /// Builds the HTTP flavor from a response with a status of 400 or above.
    ///
    /// The status code becomes the error code. The message is taken from an
    /// `error` field in the JSON body when there is one; a body that is not
    /// JSON (or has no such field) degrades silently to the status's reason
    /// phrase, and finally to a generic default.
    pub(crate) fn from_request_and_response(request: RequestInfo, response: ApiResponse) -> Self {
        let status = response.status();

        let message = serde_json::from_slice::<serde_json::Value>(response.body())
            .ok()
            .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_owned))
            .filter(|message| !message.is_empty())
            .or_else(|| status.canonical_reason().map(str::to_owned))
            .unwrap_or_else(|| DEFAULT_API_ERROR_MESSAGE.to_owned());

        Self {
            request,
            response: Some(response),
            message,
            code: status.as_u16(),
            source: None,
        }
    }

    /// The request that failed.
    #[must_use]
    pub const fn request(&self) -> &RequestInfo {
        &self.request
    }

    /// The response, present only when the service answered the call.
    #[must_use]
    pub const fn response(&self) -> Option<&ApiResponse> {
        self.response.as_ref()
    }

    /// Whether a response is attached, i.e. whether the call reached the
    /// service at all.
    #[must_use]
    pub const fn has_response(&self) -> bool {
        self.response.is_some()
    }

    /// The HTTP status code, or 0 when the request never completed.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// The human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
