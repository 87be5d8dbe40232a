/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::lists::ListService;
use crate::application::services::page_size;
use crate::error::AppError;
use crate::model::pagination::Paginator;
use crate::presentation::list::PeopleList;
use crate::presentation::person::Person;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ListService for Client {
    fn lists(&self, per_page: u32) -> Paginator<'_, PeopleList> {
        let per_page = page_size(per_page);
        let endpoints = self.http_client().endpoints();
        Paginator::counted(self.http_client(), move |page| {
            endpoints.lists_page(page, per_page)
        })
    }

    async fn get_lists(&self, per_page: u32) -> Result<Vec<PeopleList>, AppError> {
        info!("Getting lists");
        let lists = self.lists(per_page).collect_all().await?;
        debug!("Lists obtained: {}", lists.len());
        Ok(lists)
    }

    fn list_people(&self, list_id: u64, per_page: u32) -> Paginator<'_, Person> {
        let per_page = page_size(per_page);
        let endpoints = self.http_client().endpoints();
        Paginator::counted(self.http_client(), move |page| {
            endpoints.list_people(list_id, page, per_page)
        })
    }

    async fn get_list(&self, list_id: u64, per_page: u32) -> Result<Vec<Person>, AppError> {
        info!("Getting people on list {}", list_id);
        let people = self.list_people(list_id, per_page).collect_all().await?;
        debug!("People on list {}: {}", list_id, people.len());
        Ok(people)
    }
}
