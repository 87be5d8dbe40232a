use crate::error::AppError;
use crate::model::pagination::Paginator;
use crate::presentation::list::PeopleList;
use crate::presentation::person::Person;
use async_trait::async_trait;

/// Interface for the Lists API
#[async_trait]
pub trait ListService: Send + Sync {
    /// Every saved list, fetched lazily
    fn lists(&self, per_page: u32) -> Paginator<'_, PeopleList>;

    /// Every saved list
    async fn get_lists(&self, per_page: u32) -> Result<Vec<PeopleList>, AppError>;

    /// The people on a list, fetched lazily
    fn list_people(&self, list_id: u64, per_page: u32) -> Paginator<'_, Person>;

    /// The people on a list
    async fn get_list(&self, list_id: u64, per_page: u32) -> Result<Vec<Person>, AppError>;
}
