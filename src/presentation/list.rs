use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
/// A saved list of people
pub struct PeopleList {
    /// List id
    pub id: u64,
    /// Display name
    pub name: String,
    /// URL slug
    #[serde(default)]
    pub slug: Option<String>,
    /// Id of the person who created the list
    #[serde(default)]
    pub author_id: Option<u64>,
    /// Sort order of the list members
    #[serde(default)]
    pub sort_order: Option<String>,
    /// Number of people on the list
    #[serde(default)]
    pub count: Option<u64>,
    /// Every other field returned by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
