use crate::error::AppError;
use crate::model::pagination::Paginator;
use crate::model::responses::{BasicPageResponse, PageResponse};
use crate::presentation::page::{BasicPage, Site};
use async_trait::async_trait;

/// Interface for the Sites and Basic Pages APIs
///
/// See <https://nationbuilder.com/basic_pages_api>.
#[async_trait]
pub trait PageService: Send + Sync {
    /// Every site of the nation
    async fn get_sites(&self) -> Result<Vec<Site>, AppError>;

    /// The first page of basic pages of a site
    ///
    /// Pass the returned `next` link to [`PageService::get_next_pages`] for more.
    async fn get_pages(
        &self,
        site_slug: &str,
        limit: u32,
    ) -> Result<PageResponse<BasicPage>, AppError>;

    /// The page of basic pages behind a `next` link
    async fn get_next_pages(&self, next: &str) -> Result<PageResponse<BasicPage>, AppError>;

    /// Every basic page of a site, fetched lazily
    fn pages(&self, site_slug: &str, limit: u32) -> Paginator<'_, BasicPage>;

    /// Creates a basic page on a site
    async fn create_page(
        &self,
        site_slug: &str,
        page: &BasicPage,
    ) -> Result<BasicPageResponse, AppError>;
}
