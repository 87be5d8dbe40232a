use crate::error::AppError;
use crate::model::pagination::Paginator;
use crate::model::responses::PersonResponse;
use crate::presentation::person::Person;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the People API
///
/// See <https://nationbuilder.com/people_api> for the fields of the records.
#[async_trait]
pub trait PeopleService: Send + Sync {
    /// Retrieves a person's full record
    async fn get_person(&self, person_id: u64) -> Result<PersonResponse, AppError>;

    /// Updates a person's record with arbitrary fields
    ///
    /// # Arguments
    /// * `person_id` - The person's NationBuilder id
    /// * `fields` - The fields to change, e.g. `{"first_name": "Joe"}`; they
    ///   are sent wrapped as `{"person": fields}`
    async fn update_person(&self, person_id: u64, fields: &Value)
    -> Result<PersonResponse, AppError>;

    /// Creates a person
    ///
    /// A person is valid with a name, a phone number or an email. The fields
    /// are sent wrapped as `{"person": fields}`.
    async fn create_person(&self, fields: &Value) -> Result<PersonResponse, AppError>;

    /// Sets the recruiter of a person
    async fn set_recruiter_id(
        &self,
        person_id: u64,
        recruiter_id: u64,
    ) -> Result<PersonResponse, AppError>;

    /// Marks a person as a volunteer, or not
    async fn set_volunteer(
        &self,
        person_id: u64,
        volunteer: bool,
    ) -> Result<PersonResponse, AppError>;

    /// Finds the single person matching all criteria exactly
    ///
    /// Allowed keys are `email`, `first_name`, `last_name`, `phone` and
    /// `mobile`. No match or several matches is an error; use
    /// [`PeopleService::search`] for non-unique attributes.
    async fn match_person(&self, criteria: &[(&str, &str)]) -> Result<PersonResponse, AppError>;

    /// Finds every person with the given attributes, walking all pages
    ///
    /// See the "Search Endpoint" of the People API for the allowed filters.
    async fn search(&self, filters: &[(&str, &str)], per_page: u32)
    -> Result<Vec<Person>, AppError>;

    /// Returns the person with the given email, or `None` if nobody has it
    async fn get_person_by_email(&self, email: &str) -> Result<Option<PersonResponse>, AppError>;

    /// Returns the id of the person with the given email, or `None`
    async fn get_id_by_email(&self, email: &str) -> Result<Option<u64>, AppError>;

    /// Makes NationBuilder send the registration email to a person
    async fn register_person(&self, person_id: u64) -> Result<(), AppError>;

    /// Deletes a person
    async fn delete_person(&self, person_id: u64) -> Result<(), AppError>;

    /// Every person in the nation, fetched lazily one page at a time
    ///
    /// The records are abbreviated; use [`PeopleService::get_person`] for the
    /// full one.
    fn people(&self, per_page: u32) -> Paginator<'_, Person>;

    /// Every person in the nation
    async fn get_all_people(&self, per_page: u32) -> Result<Vec<Person>, AppError>;

    /// Every person within `dist` of `(lat, lng)`
    ///
    /// # Arguments
    /// * `lat` - Latitude in WGS84
    /// * `lng` - Longitude in WGS84
    /// * `dist` - Radius, in miles unless `use_km` is set
    /// * `use_km` - Interpret `dist` as kilometres
    /// * `per_page` - Number of records to fetch at a time
    async fn get_nearby(
        &self,
        lat: f64,
        lng: f64,
        dist: f64,
        use_km: bool,
        per_page: u32,
    ) -> Result<Vec<Person>, AppError>;

    /// The profile of the access token's owner
    async fn me(&self) -> Result<PersonResponse, AppError>;
}
