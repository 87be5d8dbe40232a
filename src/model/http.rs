/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/26
******************************************************************************/

//! Request issuing and response validation
//!
//! [`HttpClient`] sends every request through the shared session and passes
//! the response to [`check_response`], which leaves 2xx responses untouched
//! and turns anything else into an [`AppError`] carrying the status, headers,
//! body and URL. [`validate`] is the same classification without I/O.

use crate::application::config::Config;
use crate::application::endpoints::Endpoints;
use crate::application::session::SessionManager;
use crate::constants::NO_MATCHES_CODE;
use crate::error::{ApiError, ApiErrorKind, AppError};
use crate::model::pagination::PageSource;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Issues authorized requests against one nation and validates every response
///
/// All resource services go through this type: it makes sure the session
/// exists, sends the request and maps any non-2xx status to an [`AppError`].
pub struct HttpClient {
    session: SessionManager,
    endpoints: Endpoints,
}

impl HttpClient {
    /// Creates a client for the nation in `config`; no I/O happens here
    pub fn new(config: Arc<Config>) -> Self {
        let endpoints = match &config.rest_api.base_url {
            Some(base_url) => Endpoints::new(base_url.clone()),
            None => Endpoints::for_nation(&config.credentials.nation_slug),
        };
        Self {
            session: SessionManager::new(config),
            endpoints,
        }
    }

    /// Endpoint registry bound to this nation
    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Session manager shared by every request of this client
    #[must_use]
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Makes a GET request and decodes the JSON body
    pub async fn get<T: DeserializeOwned>(&self, url: &str, action: &str) -> Result<T, AppError> {
        self.request(Method::GET, url, None::<&()>, action).await
    }

    /// Makes a POST request with a JSON body and decodes the JSON response
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
        action: &str,
    ) -> Result<T, AppError> {
        self.request(Method::POST, url, Some(body), action).await
    }

    /// Makes a PUT request with a JSON body and decodes the JSON response
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
        action: &str,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, url, Some(body), action).await
    }

    /// Makes a DELETE request, ignoring any response body
    pub async fn delete(&self, url: &str, action: &str) -> Result<(), AppError> {
        self.request_empty(Method::DELETE, url, None::<&()>, action)
            .await
    }

    /// Makes a request and decodes the JSON response
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        action: &str,
    ) -> Result<T, AppError> {
        let response = self.send(method, url, body).await?;
        let response = check_response(response, action).await?;
        parse_response(response).await
    }

    /// Makes a request and only validates the status
    pub async fn request_empty<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        action: &str,
    ) -> Result<(), AppError> {
        let response = self.send(method, url, body).await?;
        check_response(response, action).await?;
        Ok(())
    }

    /// Sends a request without validating the response
    ///
    /// Used by callers that need to inspect a failure before the generic
    /// status mapping applies.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let session = self.session.ensure_authorized()?;

        debug!("{} {}", method, url);
        let mut request = session.http().request(method, url);
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        debug!("Response status: {}", response.status());
        Ok(response)
    }
}

#[async_trait]
impl PageSource for HttpClient {
    async fn fetch_page(&self, url: &str) -> Result<Value, AppError> {
        self.get(url, "Fetch page").await
    }

    fn resolve_link(&self, link: &str) -> Result<String, AppError> {
        self.endpoints.resolve(link)
    }
}

/// Classifies a response by status code
///
/// # Arguments
/// * `status` - Response status
/// * `headers` - Response headers
/// * `body` - Raw response body
/// * `action` - Label of the attempted action, used as the error message
/// * `url` - URL of the request
///
/// # Returns
/// * `Ok(())` - For any status in 200..=299
/// * `Err(AppError::NotFound)` - For 404
/// * `Err(AppError::BadRequest)` - For 400
/// * `Err(AppError::Response)` - For any other status
pub fn validate(
    status: StatusCode,
    headers: &HeaderMap,
    body: &str,
    action: &str,
    url: &str,
) -> Result<(), AppError> {
    if ApiErrorKind::classify(status).is_none() {
        debug!("Request to {} successful.", url);
        return Ok(());
    }
    Err(response_error(status, headers, body, action, url))
}

/// Builds and logs the error for a failed response
pub fn response_error(
    status: StatusCode,
    headers: &HeaderMap,
    body: &str,
    action: &str,
    url: &str,
) -> AppError {
    let err = ApiError::new(action, status, headers.clone(), body, url);
    error!(
        "{} failed with status {} ({}): url={} headers={:?} body={}",
        action, status, err.kind, url, headers, body
    );
    err.into()
}

/// Validates a response, reading the body only when the status is a failure
pub async fn check_response(response: Response, action: &str) -> Result<Response, AppError> {
    let status = response.status();
    if ApiErrorKind::classify(status).is_none() {
        debug!("Request to {} successful.", response.url());
        return Ok(response);
    }
    let headers = response.headers().clone();
    let url = response.url().to_string();
    let body = error_body(response.text().await, &url);
    Err(response_error(status, &headers, &body, action, &url))
}

/// Body of a failed response, or a marker naming the read error
///
/// A failed read must not look like an empty body from the server.
pub fn error_body<E: std::fmt::Display>(read: Result<String, E>, url: &str) -> String {
    match read {
        Ok(body) => body,
        Err(e) => {
            warn!("Failed to read error response body from {}: {}", url, e);
            format!("<unreadable body: {e}>")
        }
    }
}

/// True for a 400 whose JSON body carries the `no_matches` code
#[must_use]
pub fn is_no_matches(status: StatusCode, body: &str) -> bool {
    status == StatusCode::BAD_REQUEST
        && serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("code").and_then(Value::as_str).map(|c| c == NO_MATCHES_CODE))
            .unwrap_or(false)
}

/// Decodes a JSON response body
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}
