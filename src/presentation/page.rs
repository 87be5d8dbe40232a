use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
/// A site of the nation
pub struct Site {
    /// Site id
    pub id: u64,
    /// Site name
    pub name: String,
    /// Site slug, used in page and blog URLs
    pub slug: String,
    /// Custom domain, if any
    #[serde(default)]
    pub domain: Option<String>,
    /// Every other field returned by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A basic page
///
/// The same type is read from and written to the API, so a page fetched
/// from one site can be created on another unchanged.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BasicPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `published` or `drafted`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Every other field returned by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
