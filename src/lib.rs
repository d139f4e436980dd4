#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

//! # `mite-rs`
//!
//! An API client for the [mite](https://mite.de) time-tracking service.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mite_rs::{ApiClient, QueryParams};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new("my-account", "my-api-key");
//!
//! let customers = client
//!     .simple()
//!     .active_customers(Some(&QueryParams::new().set("limit", 50)))
//!     .await?;
//!
//! let entry = client
//!     .simple()
//!     .create_time_entry(json!({"minutes": 30, "note": "Code review"}))
//!     .await?;
//!
//! client.tracker().start(entry["id"].as_u64().unwrap_or_default()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every failed call surfaces as [`Error`]: codec and input problems as
//! [`Error::InvalidArgument`], network and HTTP failures as
//! [`Error::ApiClient`]. The latter distinguishes "the service rejected the
//! call" (response attached) from "the call never reached the service"
//! (no response, code 0) — see [`ApiClientError`].

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// Strict JSON codec helpers
pub mod json;
/// Ordered query parameters
pub mod params;
/// Owned response snapshots
pub mod response;
/// Resource facades
pub mod simple;

pub use crate::client::ApiClient;
pub use crate::config::{Config, MiteConfig};
pub use crate::error::{ApiClientError, Error, RequestInfo};
pub use crate::params::{ParamValue, QueryParams};
pub use crate::response::ApiResponse;
pub use crate::simple::{SimpleApi, SimpleTracker};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ApiClient, Error, MiteConfig, QueryParams, SimpleApi, SimpleTracker};
}
