/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/26
******************************************************************************/

//! Paginated fetch helper
//!
//! NationBuilder paginates in two ways:
//!
//! - **counted**: `?page=N&per_page=M`, the first response carries `total_pages`;
//! - **link-following**: every response carries a ready-made `next` link.
//!
//! [`Paginator`] walks either style as a lazy sequence of records. A page is
//! only requested once the records of the previous one have been consumed,
//! pages are fetched strictly one after another, and a page with no
//! `results` ends the sequence even if the server still reports more.

use crate::error::AppError;
use crate::model::responses::PageResponse;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use tracing::{debug, warn};

/// Something that can fetch one page of a paginated resource
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page at `url` and returns its decoded JSON body
    async fn fetch_page(&self, url: &str) -> Result<Value, AppError>;

    /// Turns a server-supplied `next` link into a fetchable URL
    fn resolve_link(&self, link: &str) -> Result<String, AppError> {
        Ok(link.to_string())
    }
}

type PageUrl<'a> = Box<dyn Fn(u32) -> String + Send + Sync + 'a>;

enum Strategy<'a> {
    Counted { page_url: PageUrl<'a> },
    Link { first_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    Start,
    Counted { page: u32, total_pages: u32 },
    Link(Option<String>),
    Done,
}

/// Lazy, restartable sequence over the records of a paginated resource
pub struct Paginator<'a, T> {
    source: &'a dyn PageSource,
    strategy: Strategy<'a>,
    buffer: VecDeque<T>,
    cursor: Cursor,
    pages_fetched: u32,
    visited: HashSet<String>,
}

impl<T> fmt::Debug for Paginator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("buffered", &self.buffer.len())
            .field("cursor", &self.cursor)
            .field("pages_fetched", &self.pages_fetched)
            .finish()
    }
}

impl<'a, T: DeserializeOwned> Paginator<'a, T> {
    /// Counted pagination; `page_url(n)` builds the URL of page `n`, starting at 1
    pub fn counted<F>(source: &'a dyn PageSource, page_url: F) -> Self
    where
        F: Fn(u32) -> String + Send + Sync + 'a,
    {
        Self::with_strategy(
            source,
            Strategy::Counted {
                page_url: Box::new(page_url),
            },
        )
    }

    /// Link-following pagination starting at `first_url`
    pub fn link(source: &'a dyn PageSource, first_url: impl Into<String>) -> Self {
        Self::with_strategy(
            source,
            Strategy::Link {
                first_url: first_url.into(),
            },
        )
    }

    fn with_strategy(source: &'a dyn PageSource, strategy: Strategy<'a>) -> Self {
        Self {
            source,
            strategy,
            buffer: VecDeque::new(),
            cursor: Cursor::Start,
            pages_fetched: 0,
            visited: HashSet::new(),
        }
    }

    /// Returns the next record, fetching the next page if the current one is used up
    ///
    /// # Returns
    /// * `Ok(Some(record))` - The next record
    /// * `Ok(None)` - The resource is exhausted
    /// * `Err(AppError)` - A page request failed; calling again re-requests that page
    pub async fn next(&mut self) -> Result<Option<T>, AppError> {
        loop {
            if let Some(record) = self.buffer.pop_front() {
                return Ok(Some(record));
            }
            if !self.fetch_next_page().await? {
                return Ok(None);
            }
        }
    }

    /// Drains the sequence into a vector, in page order
    ///
    /// Any page failure aborts the whole operation.
    pub async fn collect_all(mut self) -> Result<Vec<T>, AppError> {
        let mut records = Vec::new();
        while let Some(record) = self.next().await? {
            records.push(record);
        }
        debug!(
            "Collected {} records from {} pages",
            records.len(),
            self.pages_fetched
        );
        Ok(records)
    }

    /// Rewinds to the first page, dropping any buffered records
    pub fn restart(&mut self) {
        self.buffer.clear();
        self.cursor = Cursor::Start;
        self.pages_fetched = 0;
        self.visited.clear();
    }

    /// Number of pages requested since creation or the last restart
    #[must_use]
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// True once the last page has been consumed
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.buffer.is_empty() && self.cursor == Cursor::Done
    }

    fn next_url(&self) -> Option<(String, u32)> {
        match (&self.cursor, &self.strategy) {
            (Cursor::Start, Strategy::Counted { page_url }) => Some((page_url(1), 1)),
            (Cursor::Start, Strategy::Link { first_url }) => Some((first_url.clone(), 1)),
            (Cursor::Counted { page, total_pages }, Strategy::Counted { page_url }) => {
                (page < total_pages).then(|| (page_url(page + 1), page + 1))
            }
            (Cursor::Link(Some(url)), _) => Some((url.clone(), self.pages_fetched + 1)),
            _ => None,
        }
    }

    async fn fetch_next_page(&mut self) -> Result<bool, AppError> {
        let Some((url, page)) = self.next_url() else {
            self.cursor = Cursor::Done;
            return Ok(false);
        };

        debug!("Fetching page {} from {}", page, url);
        let value = self.source.fetch_page(&url).await?;
        let response: PageResponse<T> = serde_json::from_value(value)?;

        self.cursor = match &self.strategy {
            Strategy::Counted { .. } => {
                let total_pages = match &self.cursor {
                    Cursor::Counted { total_pages, .. } => *total_pages,
                    _ => response.total_pages.unwrap_or(1),
                };
                Cursor::Counted { page, total_pages }
            }
            Strategy::Link { .. } => {
                let next = match response.next.as_deref().filter(|n| !n.is_empty()) {
                    Some(link) => Some(self.source.resolve_link(link)?),
                    None => None,
                };
                self.visited.insert(url);
                match next {
                    Some(next) if self.visited.contains(&next) => {
                        warn!("Next link {} was already fetched, stopping", next);
                        Cursor::Link(None)
                    }
                    next => Cursor::Link(next),
                }
            }
        };
        self.pages_fetched += 1;

        if response.results.is_empty() {
            debug!("Page {} is empty, stopping", page);
            self.cursor = Cursor::Done;
            return Ok(false);
        }

        self.buffer.extend(response.results);
        Ok(true)
    }
}
