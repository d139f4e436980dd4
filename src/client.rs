use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde_json::Value;

use crate::config::{Config, MiteConfig};
use crate::error::{ApiClientError, Error, RequestInfo};
use crate::json;
use crate::params::QueryParams;
use crate::response::ApiResponse;

/// mite API client
///
/// Turns a logical operation (verb, endpoint, optional query parameters,
/// optional JSON body) into one dispatched HTTP exchange and translates any
/// failure into [`Error`]. The client holds no mutable state beyond the
/// credentials captured at construction and is safe to reuse across calls;
/// the HTTP stack is pluggable via [`Self::with_http_client`] and the
/// request shaping via the [`Config`] generic.
///
/// There are no retries, no caching and no timeout policy here; callers
/// needing those configure them on the injected `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ApiClient<C: Config = MiteConfig> {
    http: reqwest::Client,
    config: C,
}

impl ApiClient<MiteConfig> {
    /// Creates a client for the given account name and API key.
    #[must_use]
    pub fn new(account: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_config(MiteConfig::new(account, api_key))
    }
}

impl<C: Config> ApiClient<C> {
    /// Creates a client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    ///
    /// Useful for setting custom timeouts, proxies, or other HTTP
    /// configuration.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Performs a HEAD request to an endpoint with optional query
    /// parameters.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn head(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
    ) -> Result<ApiResponse, Error> {
        self.request(Method::HEAD, endpoint, params, None).await
    }

    /// Performs a GET request to an endpoint with optional query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty endpoint or empty
    /// parameter keys, and [`Error::ApiClient`] for any transport failure or
    /// a response with a status of 400 or above.
    pub async fn get(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
    ) -> Result<ApiResponse, Error> {
        self.request(Method::GET, endpoint, params, None).await
    }

    /// Performs a POST request to an endpoint with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::get`]; a body that cannot be encoded is rejected as
    /// [`Error::InvalidArgument`] before anything is sent.
    pub async fn post(&self, endpoint: &str, data: Option<&Value>) -> Result<ApiResponse, Error> {
        self.request(Method::POST, endpoint, None, data).await
    }

    /// Performs a PATCH request to an endpoint with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::post`].
    pub async fn patch(&self, endpoint: &str, data: Option<&Value>) -> Result<ApiResponse, Error> {
        self.request(Method::PATCH, endpoint, None, data).await
    }

    /// Performs a DELETE request to an endpoint with optional query
    /// parameters.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn delete(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
    ) -> Result<ApiResponse, Error> {
        self.request(Method::DELETE, endpoint, params, None).await
    }

    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<&QueryParams>,
        data: Option<&Value>,
    ) -> Result<ApiResponse, Error> {
        self.config.validate()?;

        if endpoint.is_empty() {
            return Err(Error::InvalidArgument("endpoint must not be empty".into()));
        }
        if let Some(params) = params
            && params.iter().any(|(key, _)| key.is_empty())
        {
            return Err(Error::InvalidArgument(
                "query parameter keys must not be empty".into(),
            ));
        }

        let mut url = self.config.url(endpoint);
        if let Some(params) = params.filter(|params| !params.is_empty()) {
            url.push('?');
            url.push_str(&params.encode());
        }

        let info = RequestInfo::new(method.clone(), url.clone());

        let mut builder = self.http.request(method, url).headers(self.config.headers()?);
        if let Some(data) = data {
            let body = json::encode(data)?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        tracing::debug!(method = %info.method(), url = info.url(), "dispatching request");

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let reason = format!(
                    "unable to send {} request to {endpoint}",
                    info.method()
                );
                return Err(ApiClientError::from_request_and_reason(info, reason, Some(e)).into());
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                return Err(ApiClientError::from_request_and_reason(
                    info,
                    format!("unable to read response from {endpoint}"),
                    Some(e),
                )
                .into());
            }
        };

        let response = ApiResponse::new(status, headers, body);

        if status.as_u16() >= 400 {
            return Err(ApiClientError::from_request_and_response(info, response).into());
        }

        Ok(response)
    }
}
