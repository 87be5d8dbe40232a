/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # NationBuilder Client
//!
//! An async client for the NationBuilder v1 REST API. People, tags, lists,
//! pages, blogs and contacts are exposed as methods on a single [`Client`],
//! all of which share one lazily authorized session.
//!
//! ## Usage
//!
//! ```ignore
//! use nationbuilder_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new("acme", "my-api-token"));
//!     let person = client.get_person(42).await?;
//!     info!("{}", person.person);
//!
//!     let mut people = client.people(100);
//!     while let Some(person) = people.next().await? {
//!         info!("{} {:?}", person.id, person.email);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! - [`application::session`] owns the authenticated transport session.
//! - [`application::endpoints`] turns templates into concrete URLs.
//! - [`model::http`] issues requests and maps non-2xx responses to [`error::AppError`].
//! - [`model::pagination`] walks counted and link-following paginated resources.
//! - [`application::interfaces`] declares the per-resource services implemented by [`Client`].
//!
//! [`Client`]: application::client::Client

/// Application layer: configuration, session, endpoints, services and the client
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP transport, pagination and wire models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Resource records returned by the API
pub mod presentation;
/// Environment, credential file and logging helpers
pub mod utils;

/// Re-export of the configuration module at the crate root
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
