/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::pages::PageService;
use crate::error::AppError;
use crate::model::pagination::Paginator;
use crate::model::requests::BasicPageRequest;
use crate::model::responses::{BasicPageResponse, PageResponse};
use crate::presentation::page::{BasicPage, Site};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl PageService for Client {
    async fn get_sites(&self) -> Result<Vec<Site>, AppError> {
        info!("Getting sites");
        let url = self.http_client().endpoints().sites();
        let sites = Paginator::link(self.http_client(), url)
            .collect_all()
            .await?;
        debug!("Sites obtained: {}", sites.len());
        Ok(sites)
    }

    async fn get_pages(
        &self,
        site_slug: &str,
        limit: u32,
    ) -> Result<PageResponse<BasicPage>, AppError> {
        info!("Getting pages of site {}", site_slug);
        let url = self
            .http_client()
            .endpoints()
            .basic_pages(site_slug, Some(limit));
        self.http_client().get(&url, "Get pages").await
    }

    async fn get_next_pages(&self, next: &str) -> Result<PageResponse<BasicPage>, AppError> {
        let url = self.http_client().endpoints().resolve(next)?;
        self.http_client().get(&url, "Get next pages").await
    }

    fn pages(&self, site_slug: &str, limit: u32) -> Paginator<'_, BasicPage> {
        let url = self
            .http_client()
            .endpoints()
            .basic_pages(site_slug, Some(limit));
        Paginator::link(self.http_client(), url)
    }

    async fn create_page(
        &self,
        site_slug: &str,
        page: &BasicPage,
    ) -> Result<BasicPageResponse, AppError> {
        info!(
            "Creating page {} on site {}",
            page.slug.as_deref().unwrap_or("<no slug>"),
            site_slug
        );
        let url = self.http_client().endpoints().basic_pages(site_slug, None);
        self.http_client()
            .post(&url, &BasicPageRequest { basic_page: page }, "Create page")
            .await
    }
}
