/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/26
******************************************************************************/
use crate::presentation::blog::{Blog, BlogPost};
use crate::presentation::contact::{Contact, ContactType};
use crate::presentation::page::BasicPage;
use crate::presentation::person::Person;
use crate::presentation::tag::Tagging;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of a paginated resource
///
/// Counted resources fill `page`, `per_page`, `total` and `total_pages`;
/// link-following resources fill `next` and `prev`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResponse<T> {
    /// Records on this page
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// Link to the next page, absent or null on the last one
    #[serde(default)]
    pub next: Option<String>,
    /// Link to the previous page
    #[serde(default)]
    pub prev: Option<String>,
    /// Number of this page
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Total number of records
    #[serde(default)]
    pub total: Option<u64>,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl<T> PageResponse<T> {
    /// True if the server reports a further page
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
/// `{"person": {...}}`
pub struct PersonResponse {
    /// The person record
    pub person: Person,
    /// Precinct data, only present on some endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precinct: Option<Value>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
/// Response of a tagging call, single or bulk
pub struct TaggingResponse {
    /// Set when a single tag was applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagging: Option<Tagging>,
    /// Set when several tags were applied
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taggings: Vec<Tagging>,
}

impl TaggingResponse {
    /// All taggings in the response, whichever shape it had
    #[must_use]
    pub fn into_taggings(self) -> Vec<Tagging> {
        self.tagging.into_iter().chain(self.taggings).collect()
    }
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
/// `{"basic_page": {...}}`
pub struct BasicPageResponse {
    /// The page
    pub basic_page: BasicPage,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
/// `{"blog": {...}}`
pub struct BlogResponse {
    /// The blog
    pub blog: Blog,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
/// `{"blog_post": {...}}`
pub struct BlogPostResponse {
    /// The post
    pub blog_post: BlogPost,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
/// `{"contact": {...}}`
pub struct ContactResponse {
    /// The logged contact
    pub contact: Contact,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
/// `{"contact_type": {...}}`
pub struct ContactTypeResponse {
    /// The contact type
    pub contact_type: ContactType,
}
