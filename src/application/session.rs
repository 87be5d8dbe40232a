/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session management
//!
//! A [`SessionManager`] owns at most one authenticated transport session.
//! The session is built on the first [`SessionManager::ensure_authorized`]
//! call and then reused by every request issued through the same client.
//! Building it performs no network I/O.

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use once_cell::sync::OnceCell;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// An authenticated HTTP transport handle
///
/// Carries the bearer token and the JSON headers as default headers, so
/// requests built from [`Session::http`] need nothing else.
#[derive(Debug, Clone)]
pub struct Session {
    http: Client,
    nation_slug: String,
}

impl Session {
    /// The underlying HTTP client
    #[must_use]
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// The nation this session is bound to
    #[must_use]
    pub fn nation_slug(&self) -> &str {
        &self.nation_slug
    }
}

/// Observable state of a [`SessionManager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session has been built yet
    Unauthenticated,
    /// A session exists and is reused for every request
    Authenticated,
}

/// Lazily builds and then holds the session of one client
pub struct SessionManager {
    config: Arc<Config>,
    session: OnceCell<Session>,
}

impl SessionManager {
    /// Creates an unauthenticated manager; no I/O happens here
    #[must_use]
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            session: OnceCell::new(),
        }
    }

    /// Returns the session, building it on the first call
    ///
    /// # Returns
    /// * `Ok(&Session)` - The same session on every call
    /// * `Err(AppError::Configuration)` - If the slug or token is missing
    /// * `Err(AppError::Transport)` - If the HTTP client cannot be built
    pub fn ensure_authorized(&self) -> Result<&Session, AppError> {
        self.session.get_or_try_init(|| build_session(&self.config))
    }

    /// Current state of the manager
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.session.get().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    /// True once a session has been built
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.state() == SessionState::Authenticated
    }

    /// The configuration the session is built from
    #[must_use]
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

fn build_session(config: &Config) -> Result<Session, AppError> {
    let nation_slug = config.credentials.nation_slug.trim();
    if nation_slug.is_empty() {
        return Err(AppError::Configuration(
            "nation slug is missing".to_string(),
        ));
    }
    let token = config
        .credentials
        .api_token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Configuration("api token is missing".to_string()))?;

    let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| AppError::Configuration("api token contains invalid characters".to_string()))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, auth);

    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers);

    if let Some(timeout) = config.rest_api.timeout {
        builder = builder.timeout(Duration::from_secs(timeout));
    }

    if config.tls.accept_invalid_certs {
        warn!("TLS certificate verification is disabled for nation {nation_slug}");
        builder = builder.danger_accept_invalid_certs(true);
    }

    let http = builder.build()?;
    debug!("Session created for nation {}", nation_slug);

    Ok(Session {
        http,
        nation_slug: nation_slug.to_string(),
    })
}
