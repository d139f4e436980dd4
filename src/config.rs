use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT as USER_AGENT_HEADER};

use crate::error::Error;

/// Domain the account name is prepended to when no base URL override is set.
pub const MITE_DOMAIN: &str = "mite.de";
/// Header carrying the API key.
pub const HDR_MITE_API_KEY: &str = "x-miteapikey";
/// Base `User-Agent` value identifying this library.
pub const USER_AGENT: &str = concat!(
    "mite-rs/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/gamez/mite-rs)"
);

/// Credentials and request shaping for one mite account.
///
/// Captured once at client construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct MiteConfig {
    account: String,
    api_key: String,
    api_base: Option<String>,
    user_agent_extras: Vec<String>,
}

impl MiteConfig {
    /// Creates a configuration for the given account name and API key.
    #[must_use]
    pub fn new(account: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            api_key: api_key.into(),
            api_base: None,
            user_agent_extras: Vec::new(),
        }
    }

    /// Replaces the derived `https://{account}.mite.de` base URL.
    ///
    /// Mainly a test seam for pointing the client at a local mock server.
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Appends a caller-supplied token to the `User-Agent` value, joined
    /// with a single space.
    #[must_use]
    pub fn with_user_agent_extra(mut self, extra: impl Into<String>) -> Self {
        self.user_agent_extras.push(extra.into());
        self
    }

    /// The account name.
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    /// The full `User-Agent` value sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> String {
        let mut ua = USER_AGENT.to_owned();
        for extra in &self.user_agent_extras {
            ua.push(' ');
            ua.push_str(extra);
        }
        ua
    }

    fn api_base(&self) -> String {
        self.api_base
            .clone()
            .unwrap_or_else(|| format!("https://{}.{MITE_DOMAIN}", self.account))
    }
}

/// Produces URLs and the fixed header set for outgoing requests.
///
/// [`crate::ApiClient`] is generic over this trait so the request shaping
/// can be substituted in tests or adapted to a different deployment.
pub trait Config: Send + Sync {
    /// The full URL for an endpoint path, without query string.
    fn url(&self, endpoint: &str) -> String;

    /// The fixed headers sent with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured value cannot be used as a header.
    fn headers(&self) -> Result<HeaderMap, Error>;

    /// Validates the configuration before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or unusable.
    fn validate(&self) -> Result<(), Error>;
}

impl Config for MiteConfig {
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}.json", self.api_base())
    }

    fn headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let api_key = HeaderValue::from_str(&self.api_key).map_err(|e| {
            Error::InvalidArgument(format!("API key is not a valid header value: {e}"))
        })?;
        headers.insert(HDR_MITE_API_KEY, api_key);

        let user_agent = HeaderValue::from_str(&self.user_agent()).map_err(|e| {
            Error::InvalidArgument(format!("User-Agent is not a valid header value: {e}"))
        })?;
        headers.insert(USER_AGENT_HEADER, user_agent);

        Ok(headers)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.account.is_empty() {
            return Err(Error::InvalidArgument(
                "mite account name must not be empty".into(),
            ));
        }
        if self.api_key.is_empty() {
            return Err(Error::InvalidArgument(
                "mite API key must not be empty".into(),
            ));
        }

        Ok(())
    }
}
