use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A logged contact with a person
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Contact {
    /// Contact type id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<u64>,
    /// Contact method api name, e.g. `door_knock`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Person who made the contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<u64>,
    /// Person who was contacted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<u64>,
    /// Contact status api name, e.g. `answered`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcaster_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Every other field returned by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
/// A contact type configured in the nation
pub struct ContactType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// A contact method, e.g. door knock or phone call
pub struct ContactMethod {
    pub api_name: String,
    pub name: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// A contact status, e.g. answered or no answer
pub struct ContactStatus {
    pub api_name: String,
    pub name: String,
}
