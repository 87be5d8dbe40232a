/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Entry point to the NationBuilder APIs
//!
//! A [`Client`] implements every resource service (people, tags, lists,
//! pages, blogs, contacts) on top of one shared [`HttpClient`], so all of
//! them reuse the same session.
//!
//! # Example
//! ```ignore
//! use nationbuilder_client::prelude::*;
//!
//! let client = Client::new(Config::new("slug", "MY_API_KEY"));
//!
//! // get person with ID=123
//! let person = client.get_person(123).await?;
//!
//! // retrieve the people in list 5
//! let list_five = client.get_list(5, 100).await?;
//! ```

use crate::application::config::Config;
use crate::application::session::SessionState;
use crate::error::AppError;
use crate::model::http::HttpClient;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Client for one nation
pub struct Client {
    http_client: Arc<HttpClient>,
    config: Arc<Config>,
}

impl Client {
    /// Creates a client; the session is built lazily on the first request
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let http_client = Arc::new(HttpClient::new(config.clone()));
        info!(
            "Client created for nation {}",
            config.credentials.nation_slug
        );
        Self {
            http_client,
            config,
        }
    }

    /// Creates a client from `NATION_SLUG` and `NATIONBUILDER_API_TOKEN`
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    /// Creates a client from a `slug: ...` / `api_key: ...` credentials file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        Ok(Self::new(Config::from_file(path)?))
    }

    /// Builds the session now instead of on the first request
    ///
    /// # Returns
    /// * `Err(AppError::Configuration)` - If the slug or token is missing
    pub fn ensure_authorized(&self) -> Result<(), AppError> {
        self.http_client.session().ensure_authorized()?;
        Ok(())
    }

    /// Current session state
    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.http_client.session().state()
    }

    /// The transport shared by every service of this client
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// The configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::from_env()
    }
}
