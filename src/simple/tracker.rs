use serde_json::Value;

use super::unwrap;
use crate::client::ApiClient;
use crate::config::Config;
use crate::error::Error;

/// Facade for the time tracker.
///
/// The tracker tracks at most one running time entry per user; starting a
/// different entry stops the running one, and the responses reflect both.
pub struct SimpleTracker<'c, C: Config> {
    client: &'c ApiClient<C>,
}

impl<'c, C: Config> SimpleTracker<'c, C> {
    /// Creates the facade on top of an existing client.
    #[must_use]
    pub const fn new(client: &'c ApiClient<C>) -> Self {
        Self { client }
    }

    /// Fetches the currently tracked time entry, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has an
    /// unexpected shape.
    pub async fn status(&self) -> Result<Value, Error> {
        let response = self.client.get("tracker", None).await?;

        unwrap(response.json()?)
    }

    /// Starts tracking the given time entry.
    ///
    /// # Errors
    ///
    /// See [`Self::status`].
    pub async fn start(&self, id: u64) -> Result<Value, Error> {
        let response = self.client.patch(&format!("tracker/{id}"), None).await?;

        unwrap(response.json()?)
    }

    /// Stops tracking the given time entry.
    ///
    /// # Errors
    ///
    /// See [`Self::status`].
    pub async fn stop(&self, id: u64) -> Result<Value, Error> {
        let response = self.client.delete(&format!("tracker/{id}"), None).await?;

        unwrap(response.json()?)
    }
}

impl<C: Config> ApiClient<C> {
    /// Returns the tracker facade for this client
    #[must_use]
    pub const fn tracker(&self) -> SimpleTracker<'_, C> {
        SimpleTracker::new(self)
    }
}
