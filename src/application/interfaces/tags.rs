use crate::error::AppError;
use crate::model::pagination::Paginator;
use crate::model::responses::TaggingResponse;
use crate::presentation::person::Person;
use crate::presentation::tag::Tag;
use async_trait::async_trait;

/// Interface for the People Tags API
#[async_trait]
pub trait TagService: Send + Sync {
    /// Every tag in the nation, fetched lazily
    fn tags(&self, per_page: u32) -> Paginator<'_, Tag>;

    /// Every tag in the nation
    async fn get_tags(&self, per_page: u32) -> Result<Vec<Tag>, AppError>;

    /// Every person with a tag, fetched lazily
    fn people_by_tag(&self, tag: &str, per_page: u32) -> Paginator<'_, Person>;

    /// Every person with a tag
    async fn get_people_by_tag(&self, tag: &str, per_page: u32) -> Result<Vec<Person>, AppError>;

    /// Applies tags to a person
    async fn tag_person(&self, person_id: u64, tags: &[&str]) -> Result<TaggingResponse, AppError>;

    /// Removes one tag from a person
    async fn remove_tag(&self, person_id: u64, tag: &str) -> Result<(), AppError>;
}
