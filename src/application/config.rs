use crate::constants::{
    DEFAULT_PER_PAGE, ENV_ACCEPT_INVALID_CERTS, ENV_API_TOKEN, ENV_BASE_URL, ENV_NATION_SLUG,
    ENV_PER_PAGE, ENV_TIMEOUT,
};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none, parse_credentials};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Identity of the nation the client talks to
pub struct Credentials {
    /// Nation slug, e.g. `foo` in `foo.nationbuilder.com`
    pub nation_slug: String,
    /// API access token; `None` fails at the first authorized call
    #[serde(skip_serializing, default)]
    pub api_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Overrides `https://{slug}.nationbuilder.com/api/v1`
    pub base_url: Option<String>,
    /// Request timeout in seconds; the transport default applies when unset
    pub timeout: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// TLS settings of the session
pub struct TlsConfig {
    /// Skip server certificate verification. Off unless explicitly enabled.
    pub accept_invalid_certs: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the NationBuilder client
pub struct Config {
    /// Nation slug and token
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// TLS configuration
    pub tls: TlsConfig,
    /// Default number of records per page for counted pagination
    pub per_page: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            rest_api: RestApiConfig::default(),
            tls: TlsConfig::default(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Config {
    /// Creates a configuration for the given nation and token
    ///
    /// # Arguments
    /// * `nation_slug` - The nation slug (e.g. `foo` in `foo.nationbuilder.com`)
    /// * `api_token` - The access token or test token from NationBuilder
    pub fn new(nation_slug: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            credentials: Credentials {
                nation_slug: nation_slug.into(),
                api_token: Some(api_token.into()),
            },
            ..Self::default()
        }
    }

    /// Points the client at a different API root, e.g. a proxy or a test server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.rest_api.timeout = Some(seconds);
        self
    }

    /// Disables (or re-enables) server certificate verification
    #[must_use]
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.tls.accept_invalid_certs = accept;
        self
    }

    /// Sets the default page size
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Builds a configuration from the process environment
    ///
    /// Loads `.env` if present, then reads `NATION_SLUG` and
    /// `NATIONBUILDER_API_TOKEN`. Missing variables are logged and leave the
    /// corresponding field empty, which fails at the first authorized call.
    pub fn from_env() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let nation_slug: Option<String> = get_env_or_none(ENV_NATION_SLUG);
        let api_token: Option<String> = get_env_or_none(ENV_API_TOKEN);

        if nation_slug.is_none() {
            error!("{ENV_NATION_SLUG} not found in environment variables or .env file");
        }
        if api_token.is_none() {
            error!("{ENV_API_TOKEN} not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                nation_slug: nation_slug.unwrap_or_default(),
                api_token,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_none(ENV_BASE_URL),
                timeout: get_env_or_none(ENV_TIMEOUT),
            },
            tls: TlsConfig {
                accept_invalid_certs: get_env_or_default(ENV_ACCEPT_INVALID_CERTS, false),
            },
            per_page: get_env_or_default(ENV_PER_PAGE, DEFAULT_PER_PAGE),
        }
    }

    /// Builds a configuration from a two-line credentials file
    ///
    /// The format is:
    ///
    /// ```text
    /// slug: my-nation
    /// api_key: 0123456789abcdef
    /// ```
    ///
    /// A malformed file yields a configuration without a token.
    ///
    /// # Returns
    /// * `Err(AppError::Io)` - If the file cannot be read
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let creds = parse_credentials(&contents);
        if creds.slug.is_none() || creds.api_key.is_none() {
            error!(
                "Credentials file {} is missing the slug or api_key line",
                path.as_ref().display()
            );
        }
        Ok(Config {
            credentials: Credentials {
                nation_slug: creds.slug.unwrap_or_default(),
                api_token: creds.api_key,
            },
            ..Self::default()
        })
    }

    /// True if both the slug and the token are present and non-blank
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.credentials.nation_slug.trim().is_empty()
            && self
                .credentials
                .api_token
                .as_deref()
                .is_some_and(|t| !t.trim().is_empty())
    }
}
