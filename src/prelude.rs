/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # NationBuilder Client Prelude
//!
//! Commonly used types and traits in one import. Bringing the service
//! traits into scope is what makes methods like `client.get_person(..)`
//! callable on a [`Client`].
//!
//! ## Usage
//!
//! ```rust
//! use nationbuilder_client::prelude::*;
//!
//! let config = Config::new("acme", "my-api-token");
//! let client = Client::new(config);
//! assert_eq!(client.session_state(), SessionState::Unauthenticated);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the NationBuilder client
pub use crate::config::{Config, Credentials, RestApiConfig, TlsConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types of the library
pub use crate::error::{ApiError, ApiErrorKind, AppError};

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// Entry point to the API
pub use crate::application::client::Client;

/// Session management
pub use crate::application::session::{Session, SessionManager, SessionState};

/// Endpoint registry
pub use crate::application::endpoints::Endpoints;

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Resource services implemented by [`Client`]
pub use crate::application::services::{
    BlogService, ContactService, ListService, PageService, PeopleService, TagService,
};

// ============================================================================
// TRANSPORT AND PAGINATION
// ============================================================================

/// Request issuing and response validation
pub use crate::model::http::{HttpClient, validate};

/// Paginated fetching
pub use crate::model::pagination::{PageSource, Paginator};

// ============================================================================
// MODELS
// ============================================================================

/// Response envelopes
pub use crate::model::responses::{
    BasicPageResponse, BlogPostResponse, BlogResponse, ContactResponse, ContactTypeResponse,
    PageResponse, PersonResponse, TaggingResponse,
};

/// Resource records
pub use crate::presentation::{
    BasicPage, Blog, BlogPost, Contact, ContactMethod, ContactStatus, ContactType, PeopleList,
    Person, Site, Tag, Tagging,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
