use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// A tag defined in the nation
pub struct Tag {
    /// Tag name
    pub name: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
/// A tag applied to a person
pub struct Tagging {
    /// Tagged person
    pub person_id: u64,
    /// Tag name
    pub tag: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
