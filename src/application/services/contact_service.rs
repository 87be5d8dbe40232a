/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::contacts::ContactService;
use crate::constants::DEFAULT_LIMIT;
use crate::error::AppError;
use crate::model::pagination::Paginator;
use crate::model::requests::{ContactRequest, ContactTypeRequest};
use crate::model::responses::{ContactResponse, ContactTypeResponse};
use crate::presentation::contact::{Contact, ContactMethod, ContactStatus, ContactType};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ContactService for Client {
    fn contacts(&self, person_id: u64, limit: u32) -> Paginator<'_, Contact> {
        let url = self
            .http_client()
            .endpoints()
            .person_contacts(person_id, Some(limit));
        Paginator::link(self.http_client(), url)
    }

    async fn get_contacts(&self, person_id: u64) -> Result<Vec<Contact>, AppError> {
        info!("Getting contacts of person {}", person_id);
        let contacts = self
            .contacts(person_id, DEFAULT_LIMIT)
            .collect_all()
            .await?;
        debug!("Contacts obtained: {}", contacts.len());
        Ok(contacts)
    }

    async fn log_contact(
        &self,
        person_id: u64,
        contact: &Contact,
    ) -> Result<ContactResponse, AppError> {
        info!("Logging contact with person {}", person_id);
        let url = self
            .http_client()
            .endpoints()
            .person_contacts(person_id, None);
        self.http_client()
            .post(
                &url,
                &ContactRequest { contact },
                &format!("Log contact with person {person_id}"),
            )
            .await
    }

    fn contact_types(&self, limit: u32) -> Paginator<'_, ContactType> {
        let url = self.http_client().endpoints().contact_types(Some(limit));
        Paginator::link(self.http_client(), url)
    }

    async fn get_contact_types(&self) -> Result<Vec<ContactType>, AppError> {
        info!("Getting contact types");
        self.contact_types(DEFAULT_LIMIT).collect_all().await
    }

    async fn create_contact_type(
        &self,
        contact_type: &ContactType,
    ) -> Result<ContactTypeResponse, AppError> {
        info!("Creating contact type {}", contact_type.name);
        let url = self.http_client().endpoints().contact_types(None);
        self.http_client()
            .post(
                &url,
                &ContactTypeRequest { contact_type },
                "Create contact type",
            )
            .await
    }

    async fn update_contact_type(
        &self,
        id: u64,
        contact_type: &ContactType,
    ) -> Result<ContactTypeResponse, AppError> {
        info!("Updating contact type {}", id);
        let url = self.http_client().endpoints().contact_type(id);
        self.http_client()
            .put(
                &url,
                &ContactTypeRequest { contact_type },
                &format!("Update contact type {id}"),
            )
            .await
    }

    async fn delete_contact_type(&self, id: u64) -> Result<(), AppError> {
        info!("Deleting contact type {}", id);
        let url = self.http_client().endpoints().contact_type(id);
        self.http_client()
            .delete(&url, &format!("Delete contact type {id}"))
            .await
    }

    async fn get_contact_methods(&self) -> Result<Vec<ContactMethod>, AppError> {
        let url = self.http_client().endpoints().contact_methods();
        Paginator::link(self.http_client(), url).collect_all().await
    }

    async fn get_contact_statuses(&self) -> Result<Vec<ContactStatus>, AppError> {
        let url = self.http_client().endpoints().contact_statuses();
        Paginator::link(self.http_client(), url).collect_all().await
    }
}
