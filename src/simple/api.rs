use serde_json::Value;

use super::{pluck, unwrap, wrap};
use crate::client::ApiClient;
use crate::config::Config;
use crate::error::Error;
use crate::params::QueryParams;

/// Resource facade for accounts, customers, projects, services, time
/// entries and users.
///
/// Every method wraps exactly one [`ApiClient`] call and reshapes the
/// decoded JSON: lists of single-key wrapper objects become flat vectors,
/// single wrapper objects become their inner object.
pub struct SimpleApi<'c, C: Config> {
    client: &'c ApiClient<C>,
}

impl<'c, C: Config> SimpleApi<'c, C> {
    /// Creates the facade on top of an existing client.
    #[must_use]
    pub const fn new(client: &'c ApiClient<C>) -> Self {
        Self { client }
    }

    /// Fetches the account the API key belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has an
    /// unexpected shape.
    pub async fn account(&self) -> Result<Value, Error> {
        self.single("account").await
    }

    /// Fetches the user the API key belongs to.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn myself(&self) -> Result<Value, Error> {
        self.single("myself").await
    }

    /// Lists active customers.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn active_customers(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Value>, Error> {
        self.list("customers", "customer", params).await
    }

    /// Lists archived customers.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn archived_customers(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Value>, Error> {
        self.list("customers/archived", "customer", params).await
    }

    /// Fetches one customer by id.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn customer(&self, id: u64) -> Result<Value, Error> {
        self.single(&format!("customers/{id}")).await
    }

    /// Creates a customer and returns the created record.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn create_customer(&self, data: Value) -> Result<Value, Error> {
        self.create("customers", "customer", data).await
    }

    /// Updates a customer and returns the updated record.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn update_customer(&self, id: u64, data: Value) -> Result<Value, Error> {
        self.update("customers", "customer", id, data).await?;
        self.customer(id).await
    }

    /// Deletes a customer.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn delete_customer(&self, id: u64) -> Result<(), Error> {
        self.destroy("customers", id).await
    }

    /// Lists active projects.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn active_projects(&self, params: Option<&QueryParams>) -> Result<Vec<Value>, Error> {
        self.list("projects", "project", params).await
    }

    /// Lists archived projects.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn archived_projects(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Value>, Error> {
        self.list("projects/archived", "project", params).await
    }

    /// Fetches one project by id.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn project(&self, id: u64) -> Result<Value, Error> {
        self.single(&format!("projects/{id}")).await
    }

    /// Creates a project and returns the created record.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn create_project(&self, data: Value) -> Result<Value, Error> {
        self.create("projects", "project", data).await
    }

    /// Updates a project and returns the updated record.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn update_project(&self, id: u64, data: Value) -> Result<Value, Error> {
        self.update("projects", "project", id, data).await?;
        self.project(id).await
    }

    /// Deletes a project.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn delete_project(&self, id: u64) -> Result<(), Error> {
        self.destroy("projects", id).await
    }

    /// Lists active services.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn active_services(&self, params: Option<&QueryParams>) -> Result<Vec<Value>, Error> {
        self.list("services", "service", params).await
    }

    /// Lists archived services.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn archived_services(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Value>, Error> {
        self.list("services/archived", "service", params).await
    }

    /// Fetches one service by id.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn service(&self, id: u64) -> Result<Value, Error> {
        self.single(&format!("services/{id}")).await
    }

    /// Creates a service and returns the created record.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn create_service(&self, data: Value) -> Result<Value, Error> {
        self.create("services", "service", data).await
    }

    /// Updates a service and returns the updated record.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn update_service(&self, id: u64, data: Value) -> Result<Value, Error> {
        self.update("services", "service", id, data).await?;
        self.service(id).await
    }

    /// Deletes a service.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn delete_service(&self, id: u64) -> Result<(), Error> {
        self.destroy("services", id).await
    }

    /// Lists time entries.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn time_entries(&self, params: Option<&QueryParams>) -> Result<Vec<Value>, Error> {
        self.list("time_entries", "time_entry", params).await
    }

    /// Lists time entries grouped by the given criteria, e.g.
    /// `&["customer", "project"]`.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn grouped_time_entries(
        &self,
        group_by: &[&str],
        params: Option<&QueryParams>,
    ) -> Result<Vec<Value>, Error> {
        let mut params = params.cloned().unwrap_or_default();
        params.push("group_by", group_by.join(","));

        self.list("time_entries", "time_entry_group", Some(&params))
            .await
    }

    /// Fetches one time entry by id.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn time_entry(&self, id: u64) -> Result<Value, Error> {
        self.single(&format!("time_entries/{id}")).await
    }

    /// Creates a time entry and returns the created record.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn create_time_entry(&self, data: Value) -> Result<Value, Error> {
        self.create("time_entries", "time_entry", data).await
    }

    /// Updates a time entry and returns the updated record.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn update_time_entry(&self, id: u64, data: Value) -> Result<Value, Error> {
        self.update("time_entries", "time_entry", id, data).await?;
        self.time_entry(id).await
    }

    /// Deletes a time entry.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn delete_time_entry(&self, id: u64) -> Result<(), Error> {
        self.destroy("time_entries", id).await
    }

    /// Lists active users.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn active_users(&self, params: Option<&QueryParams>) -> Result<Vec<Value>, Error> {
        self.list("users", "user", params).await
    }

    /// Lists archived users.
    ///
    /// # Errors
    ///
    /// See [`Self::account`].
    pub async fn archived_users(&self, params: Option<&QueryParams>) -> Result<Vec<Value>, Error> {
        self.list("users/archived", "user", params).await
    }

    async fn list(
        &self,
        endpoint: &str,
        column: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Value>, Error> {
        let response = self.client.get(endpoint, params).await?;
        let rows: Value = response.json()?;

        Ok(pluck(&rows, column))
    }

    async fn single(&self, endpoint: &str) -> Result<Value, Error> {
        let response = self.client.get(endpoint, None).await?;

        unwrap(response.json()?)
    }

    async fn create(&self, endpoint: &str, key: &str, data: Value) -> Result<Value, Error> {
        let response = self.client.post(endpoint, Some(&wrap(key, data))).await?;

        unwrap(response.json()?)
    }

    async fn update(&self, endpoint: &str, key: &str, id: u64, data: Value) -> Result<(), Error> {
        self.client
            .patch(&format!("{endpoint}/{id}"), Some(&wrap(key, data)))
            .await?;

        Ok(())
    }

    async fn destroy(&self, endpoint: &str, id: u64) -> Result<(), Error> {
        self.client.delete(&format!("{endpoint}/{id}"), None).await?;

        Ok(())
    }
}

impl<C: Config> ApiClient<C> {
    /// Returns the resource facade for this client
    #[must_use]
    pub const fn simple(&self) -> SimpleApi<'_, C> {
        SimpleApi::new(self)
    }
}
