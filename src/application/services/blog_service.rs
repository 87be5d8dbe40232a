/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::blogs::BlogService;
use crate::error::AppError;
use crate::model::pagination::Paginator;
use crate::model::requests::{BlogPostRequest, BlogRequest};
use crate::model::responses::{BlogPostResponse, BlogResponse, PageResponse};
use crate::presentation::blog::{Blog, BlogPost};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl BlogService for Client {
    async fn get_blogs(
        &self,
        site_slug: &str,
        limit: u32,
    ) -> Result<PageResponse<Blog>, AppError> {
        info!("Getting blogs of site {}", site_slug);
        let url = self.http_client().endpoints().blogs(site_slug, Some(limit));
        self.http_client().get(&url, "Get blogs").await
    }

    async fn create_blog(&self, site_slug: &str, blog: &Blog) -> Result<BlogResponse, AppError> {
        info!("Creating blog on site {}", site_slug);
        let url = self.http_client().endpoints().blogs(site_slug, None);
        self.http_client()
            .post(&url, &BlogRequest { blog }, "Create blog")
            .await
    }

    async fn get_blog_posts(
        &self,
        site_slug: &str,
        blog_id: u64,
        limit: u32,
    ) -> Result<PageResponse<BlogPost>, AppError> {
        info!("Getting posts of blog {} on site {}", blog_id, site_slug);
        let url = self
            .http_client()
            .endpoints()
            .blog_posts(site_slug, blog_id, Some(limit));
        self.http_client().get(&url, "Get blog posts").await
    }

    async fn get_next_blog_posts(&self, next: &str) -> Result<PageResponse<BlogPost>, AppError> {
        let url = self.http_client().endpoints().resolve(next)?;
        self.http_client().get(&url, "Get next blog posts").await
    }

    fn blog_posts(&self, site_slug: &str, blog_id: u64, limit: u32) -> Paginator<'_, BlogPost> {
        let url = self
            .http_client()
            .endpoints()
            .blog_posts(site_slug, blog_id, Some(limit));
        Paginator::link(self.http_client(), url)
    }

    async fn create_blog_post(
        &self,
        site_slug: &str,
        blog_id: u64,
        post: &BlogPost,
    ) -> Result<BlogPostResponse, AppError> {
        info!("Creating post in blog {} on site {}", blog_id, site_slug);
        let url = self
            .http_client()
            .endpoints()
            .blog_posts(site_slug, blog_id, None);
        self.http_client()
            .post(&url, &BlogPostRequest { blog_post: post }, "Create blog post")
            .await
    }
}
