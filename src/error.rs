/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the NationBuilder client
//!
//! Every non-2xx response becomes one of [`AppError::NotFound`],
//! [`AppError::BadRequest`] or [`AppError::Response`], each carrying an
//! [`ApiError`] with the status, headers, raw body and URL of the failed
//! request so it can be diagnosed without re-issuing it.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::fmt;
use thiserror::Error;

/// Classification of a failed HTTP response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// HTTP 404
    NotFound,
    /// HTTP 400
    BadRequest,
    /// Any other status outside 200..=299
    Other,
}

impl ApiErrorKind {
    /// Classifies a status code
    ///
    /// # Returns
    /// `None` for 200..=299, otherwise the kind of error the status maps to
    #[must_use]
    pub fn classify(status: StatusCode) -> Option<Self> {
        match status.as_u16() {
            200..=299 => None,
            404 => Some(Self::NotFound),
            400 => Some(Self::BadRequest),
            _ => Some(Self::Other),
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::BadRequest => write!(f, "bad request"),
            Self::Other => write!(f, "unexpected response"),
        }
    }
}

/// Diagnostic payload of a failed response
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Classification of the failure
    pub kind: ApiErrorKind,
    /// The action that was attempted, e.g. "Get person 42"
    pub message: String,
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: String,
    /// URL of the request
    pub url: String,
}

impl ApiError {
    /// Builds the payload, classifying `status`
    ///
    /// Statuses in the success range are classified as [`ApiErrorKind::Other`]
    /// since a caller building an error for them has already decided it failed.
    pub fn new(
        message: impl Into<String>,
        status: StatusCode,
        headers: HeaderMap,
        body: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            kind: ApiErrorKind::classify(status).unwrap_or(ApiErrorKind::Other),
            message: message.into(),
            status,
            headers,
            body: body.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) for {}: {}",
            self.message, self.status, self.url, self.body
        )
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err.kind {
            ApiErrorKind::NotFound => AppError::NotFound(Box::new(err)),
            ApiErrorKind::BadRequest => AppError::BadRequest(Box::new(err)),
            ApiErrorKind::Other => AppError::Response(Box::new(err)),
        }
    }
}

/// Main error type of the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid credentials, detected before any network call
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The server answered 404
    #[error("not found: {0}")]
    NotFound(Box<ApiError>),
    /// The server answered 400
    #[error("bad request: {0}")]
    BadRequest(Box<ApiError>),
    /// The server answered with any other non-2xx status
    #[error("response error: {0}")]
    Response(Box<ApiError>),
    /// Connection-level failure from the HTTP layer
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O failure, e.g. reading a credentials file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid argument passed by the caller
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Returns the response payload for errors raised from an HTTP response
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            AppError::NotFound(e) | AppError::BadRequest(e) | AppError::Response(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the response status for errors raised from an HTTP response
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.api_error().map(|e| e.status)
    }

    /// True if this error is a 404 from the server
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}
