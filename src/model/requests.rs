//! Request bodies
//!
//! NationBuilder expects every payload wrapped under a key named after the
//! resource, e.g. `{"person": {...}}` or `{"blog_post": {...}}`.

use crate::presentation::blog::{Blog, BlogPost};
use crate::presentation::contact::{Contact, ContactType};
use crate::presentation::page::BasicPage;
use serde::Serialize;
use serde_json::Value;

/// `{"person": {...}}`
#[derive(Debug, Serialize)]
pub struct PersonRequest<'a> {
    /// Person fields to create or update
    pub person: &'a Value,
}

/// Body of a tagging request
#[derive(Debug, Serialize)]
pub struct TaggingBody {
    /// Tags to apply
    pub tag: Vec<String>,
}

/// `{"tagging": {"tag": [...]}}`
#[derive(Debug, Serialize)]
pub struct TaggingRequest {
    /// The tagging body
    pub tagging: TaggingBody,
}

impl TaggingRequest {
    /// Wraps the given tags
    pub fn new<S: AsRef<str>>(tags: &[S]) -> Self {
        Self {
            tagging: TaggingBody {
                tag: tags.iter().map(|t| t.as_ref().to_string()).collect(),
            },
        }
    }
}

/// `{"basic_page": {...}}`
#[derive(Debug, Serialize)]
pub struct BasicPageRequest<'a> {
    /// The page to create
    pub basic_page: &'a BasicPage,
}

/// `{"blog": {...}}`
#[derive(Debug, Serialize)]
pub struct BlogRequest<'a> {
    /// The blog to create
    pub blog: &'a Blog,
}

/// `{"blog_post": {...}}`
#[derive(Debug, Serialize)]
pub struct BlogPostRequest<'a> {
    /// The post to create
    pub blog_post: &'a BlogPost,
}

/// `{"contact": {...}}`
#[derive(Debug, Serialize)]
pub struct ContactRequest<'a> {
    /// The contact to log
    pub contact: &'a Contact,
}

/// `{"contact_type": {...}}`
#[derive(Debug, Serialize)]
pub struct ContactTypeRequest<'a> {
    /// The contact type to create or update
    pub contact_type: &'a ContactType,
}
