use crate::error::AppError;
use crate::model::pagination::Paginator;
use crate::model::responses::{ContactResponse, ContactTypeResponse};
use crate::presentation::contact::{Contact, ContactMethod, ContactStatus, ContactType};
use async_trait::async_trait;

/// Interface for the Contacts API
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Contacts logged with a person, fetched lazily
    fn contacts(&self, person_id: u64, limit: u32) -> Paginator<'_, Contact>;

    /// Every contact logged with a person
    async fn get_contacts(&self, person_id: u64) -> Result<Vec<Contact>, AppError>;

    /// Logs a contact with a person
    async fn log_contact(
        &self,
        person_id: u64,
        contact: &Contact,
    ) -> Result<ContactResponse, AppError>;

    /// Contact types of the nation, fetched lazily
    fn contact_types(&self, limit: u32) -> Paginator<'_, ContactType>;

    /// Every contact type of the nation
    async fn get_contact_types(&self) -> Result<Vec<ContactType>, AppError>;

    /// Creates a contact type
    async fn create_contact_type(
        &self,
        contact_type: &ContactType,
    ) -> Result<ContactTypeResponse, AppError>;

    /// Renames a contact type
    async fn update_contact_type(
        &self,
        id: u64,
        contact_type: &ContactType,
    ) -> Result<ContactTypeResponse, AppError>;

    /// Deletes a contact type
    async fn delete_contact_type(&self, id: u64) -> Result<(), AppError>;

    /// Every contact method, e.g. door knock
    async fn get_contact_methods(&self) -> Result<Vec<ContactMethod>, AppError>;

    /// Every contact status, e.g. answered
    async fn get_contact_statuses(&self) -> Result<Vec<ContactStatus>, AppError>;
}
