/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::people::PeopleService;
use crate::application::services::page_size;
use crate::constants::MILES_PER_KM;
use crate::error::AppError;
use crate::model::http::{error_body, is_no_matches, parse_response, response_error};
use crate::model::pagination::Paginator;
use crate::model::requests::PersonRequest;
use crate::model::responses::PersonResponse;
use crate::presentation::person::Person;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};
use tracing::{debug, info};

const MATCH_KEYS: [&str; 5] = ["email", "first_name", "last_name", "phone", "mobile"];

#[async_trait]
impl PeopleService for Client {
    async fn get_person(&self, person_id: u64) -> Result<PersonResponse, AppError> {
        info!("Getting person {}", person_id);
        let url = self.http_client().endpoints().person(person_id);
        self.http_client()
            .get(&url, &format!("Get person {person_id}"))
            .await
    }

    async fn update_person(
        &self,
        person_id: u64,
        fields: &Value,
    ) -> Result<PersonResponse, AppError> {
        info!("Updating person {}", person_id);
        let url = self.http_client().endpoints().person(person_id);
        self.http_client()
            .post(
                &url,
                &PersonRequest { person: fields },
                &format!("Update person with id {person_id}"),
            )
            .await
    }

    async fn create_person(&self, fields: &Value) -> Result<PersonResponse, AppError> {
        info!("Creating person");
        let url = self.http_client().endpoints().people();
        let created: PersonResponse = self
            .http_client()
            .post(&url, &PersonRequest { person: fields }, "Create person")
            .await?;
        debug!("Person created with id {}", created.person.id);
        Ok(created)
    }

    async fn set_recruiter_id(
        &self,
        person_id: u64,
        recruiter_id: u64,
    ) -> Result<PersonResponse, AppError> {
        self.update_person(person_id, &json!({ "recruiter_id": recruiter_id }))
            .await
    }

    async fn set_volunteer(
        &self,
        person_id: u64,
        volunteer: bool,
    ) -> Result<PersonResponse, AppError> {
        self.update_person(person_id, &json!({ "is_volunteer": volunteer }))
            .await
    }

    async fn match_person(&self, criteria: &[(&str, &str)]) -> Result<PersonResponse, AppError> {
        if criteria.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one match criterion is required".to_string(),
            ));
        }
        if let Some((key, _)) = criteria.iter().find(|(k, _)| !MATCH_KEYS.contains(k)) {
            return Err(AppError::InvalidInput(format!(
                "cannot match on '{key}', allowed keys are {}",
                MATCH_KEYS.join(", ")
            )));
        }
        info!("Matching person on {} criteria", criteria.len());
        let url = self.http_client().endpoints().people_match(criteria);
        self.http_client()
            .get(&url, &format!("Match {criteria:?}"))
            .await
    }

    async fn search(
        &self,
        filters: &[(&str, &str)],
        per_page: u32,
    ) -> Result<Vec<Person>, AppError> {
        info!("Searching people with {} filters", filters.len());
        let per_page = page_size(per_page);
        let endpoints = self.http_client().endpoints();
        let people = Paginator::counted(self.http_client(), move |page| {
            endpoints.people_search(filters, page, per_page)
        })
        .collect_all()
        .await?;
        debug!("Search returned {} people", people.len());
        Ok(people)
    }

    async fn get_person_by_email(&self, email: &str) -> Result<Option<PersonResponse>, AppError> {
        const ACTION: &str = "Get person by email";
        info!("Getting person by email");
        let url = self.http_client().endpoints().people_match_email(email);
        let response = self
            .http_client()
            .send(Method::GET, &url, None::<&()>)
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(Some(parse_response(response).await?));
        }

        let headers = response.headers().clone();
        let body = error_body(response.text().await, &url);
        if is_no_matches(status, &body) {
            debug!("No person matches the email");
            return Ok(None);
        }
        Err(response_error(status, &headers, &body, ACTION, &url))
    }

    async fn get_id_by_email(&self, email: &str) -> Result<Option<u64>, AppError> {
        Ok(self
            .get_person_by_email(email)
            .await?
            .map(|found| found.person.id))
    }

    async fn register_person(&self, person_id: u64) -> Result<(), AppError> {
        info!("Sending registration email to person {}", person_id);
        let url = self.http_client().endpoints().person_register(person_id);
        self.http_client()
            .request_empty(
                Method::GET,
                &url,
                None::<&()>,
                &format!("Do registration for id {person_id}"),
            )
            .await
    }

    async fn delete_person(&self, person_id: u64) -> Result<(), AppError> {
        info!("Deleting person {}", person_id);
        let url = self.http_client().endpoints().person(person_id);
        self.http_client()
            .delete(&url, &format!("Delete person {person_id}"))
            .await
    }

    fn people(&self, per_page: u32) -> Paginator<'_, Person> {
        let per_page = page_size(per_page);
        let endpoints = self.http_client().endpoints();
        Paginator::counted(self.http_client(), move |page| {
            endpoints.people_page(page, per_page)
        })
    }

    async fn get_all_people(&self, per_page: u32) -> Result<Vec<Person>, AppError> {
        info!("Getting all people");
        let people = self.people(per_page).collect_all().await?;
        debug!("People obtained: {}", people.len());
        Ok(people)
    }

    async fn get_nearby(
        &self,
        lat: f64,
        lng: f64,
        dist: f64,
        use_km: bool,
        per_page: u32,
    ) -> Result<Vec<Person>, AppError> {
        let dist = if use_km { dist * MILES_PER_KM } else { dist };
        info!("Getting people within {} miles of ({}, {})", dist, lat, lng);
        let per_page = page_size(per_page);
        let endpoints = self.http_client().endpoints();
        Paginator::counted(self.http_client(), move |page| {
            endpoints.people_nearby(lat, lng, dist, page, per_page)
        })
        .collect_all()
        .await
    }

    async fn me(&self) -> Result<PersonResponse, AppError> {
        let url = self.http_client().endpoints().people_me();
        self.http_client().get(&url, "Get me").await
    }
}
