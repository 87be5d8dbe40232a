use crate::error::AppError;
use crate::model::pagination::Paginator;
use crate::model::responses::{BlogPostResponse, BlogResponse, PageResponse};
use crate::presentation::blog::{Blog, BlogPost};
use async_trait::async_trait;

/// Interface for the Blogs API
///
/// A site can hold several blogs, each essentially a topic; posts are the
/// articles within one blog.
#[async_trait]
pub trait BlogService: Send + Sync {
    /// The first page of blogs of a site
    async fn get_blogs(&self, site_slug: &str, limit: u32)
    -> Result<PageResponse<Blog>, AppError>;

    /// Creates a blog on a site
    async fn create_blog(&self, site_slug: &str, blog: &Blog) -> Result<BlogResponse, AppError>;

    /// The first page of posts of a blog
    async fn get_blog_posts(
        &self,
        site_slug: &str,
        blog_id: u64,
        limit: u32,
    ) -> Result<PageResponse<BlogPost>, AppError>;

    /// The page of posts behind a `next` link
    async fn get_next_blog_posts(&self, next: &str) -> Result<PageResponse<BlogPost>, AppError>;

    /// Every post of a blog, fetched lazily
    fn blog_posts(&self, site_slug: &str, blog_id: u64, limit: u32) -> Paginator<'_, BlogPost>;

    /// Creates a post in a blog
    async fn create_blog_post(
        &self,
        site_slug: &str,
        blog_id: u64,
        post: &BlogPost,
    ) -> Result<BlogPostResponse, AppError>;
}
