use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A person record
///
/// Listing and search endpoints return abbreviated records; use
/// `get_person` with the id for the full one. Fields not modelled here are
/// kept in `extra`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Person {
    /// NationBuilder id
    pub id: u64,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Primary email address
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Mobile number
    #[serde(default)]
    pub mobile: Option<String>,
    /// Whether the person is a volunteer
    #[serde(default)]
    pub is_volunteer: Option<bool>,
    /// Id of the person who recruited them
    #[serde(default)]
    pub recruiter_id: Option<u64>,
    /// Tags applied to the person
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Every other field returned by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Person {
    /// `first_name last_name`, skipping missing parts
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
