/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::tags::TagService;
use crate::application::services::page_size;
use crate::error::AppError;
use crate::model::pagination::Paginator;
use crate::model::requests::TaggingRequest;
use crate::model::responses::TaggingResponse;
use crate::presentation::person::Person;
use crate::presentation::tag::Tag;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl TagService for Client {
    fn tags(&self, per_page: u32) -> Paginator<'_, Tag> {
        let per_page = page_size(per_page);
        let endpoints = self.http_client().endpoints();
        Paginator::counted(self.http_client(), move |page| {
            endpoints.tags_page(page, per_page)
        })
    }

    async fn get_tags(&self, per_page: u32) -> Result<Vec<Tag>, AppError> {
        info!("Getting tags");
        let tags = self.tags(per_page).collect_all().await?;
        debug!("Tags obtained: {}", tags.len());
        Ok(tags)
    }

    fn people_by_tag(&self, tag: &str, per_page: u32) -> Paginator<'_, Person> {
        let per_page = page_size(per_page);
        let tag = tag.to_string();
        let endpoints = self.http_client().endpoints();
        Paginator::counted(self.http_client(), move |page| {
            endpoints.tag_people(&tag, page, per_page)
        })
    }

    async fn get_people_by_tag(&self, tag: &str, per_page: u32) -> Result<Vec<Person>, AppError> {
        info!("Getting people tagged {}", tag);
        let people = self.people_by_tag(tag, per_page).collect_all().await?;
        debug!("People tagged {}: {}", tag, people.len());
        Ok(people)
    }

    async fn tag_person(&self, person_id: u64, tags: &[&str]) -> Result<TaggingResponse, AppError> {
        if tags.is_empty() {
            return Err(AppError::InvalidInput("no tags given".to_string()));
        }
        info!("Tagging person {} with {:?}", person_id, tags);
        let url = self.http_client().endpoints().person_taggings(person_id);
        self.http_client()
            .post(
                &url,
                &TaggingRequest::new(tags),
                &format!("Tag person {person_id}"),
            )
            .await
    }

    async fn remove_tag(&self, person_id: u64, tag: &str) -> Result<(), AppError> {
        info!("Removing tag {} from person {}", tag, person_id);
        let url = self.http_client().endpoints().person_tagging(person_id, tag);
        self.http_client()
            .delete(&url, &format!("Remove tag {tag} from person {person_id}"))
            .await
    }
}
