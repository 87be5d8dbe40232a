/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Endpoint registry
//!
//! Every resource URL is a [`Template`] relative to the nation's API root.
//! [`Endpoints`] fills the templates; all user-supplied strings are
//! percent-encoded before they are substituted.

use crate::constants::{API_PATH, NATIONBUILDER_HOST};
use crate::error::AppError;
use reqwest::Url;
use std::fmt::Display;

macro_rules! paginated {
    ($path:literal) => {
        Template(concat!($path, "?page={page}&per_page={per_page}"))
    };
}

/// A URL pattern with named `{placeholders}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(pub &'static str);

impl Template {
    /// Substitutes every `{name}` with its value
    ///
    /// Values are inserted verbatim; callers encode them first.
    ///
    /// # Panics
    /// If a placeholder is left unfilled. That is a programming error in the
    /// registry, not something a caller can trigger with user input.
    #[must_use]
    pub fn fill(&self, params: &[(&str, &str)]) -> String {
        let mut out = self.0.to_string();
        for (name, value) in params {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        assert!(
            !out.contains('{'),
            "unfilled placeholder in endpoint template {:?}: {out}",
            self.0
        );
        out
    }
}

/// `/people/{id}`
pub const PERSON: Template = Template("/people/{id}");
/// `/people`
pub const PEOPLE: Template = Template("/people");
/// `/people/me`
pub const PEOPLE_ME: Template = Template("/people/me");
/// `/people/{id}/register`
pub const PERSON_REGISTER: Template = Template("/people/{id}/register");
/// `/people/{id}/contacts`
pub const PERSON_CONTACTS: Template = Template("/people/{id}/contacts");
/// `/people/{id}/taggings`
pub const PERSON_TAGGINGS: Template = Template("/people/{id}/taggings");
/// `/people/{id}/taggings/{tag}`
pub const PERSON_TAGGING: Template = Template("/people/{id}/taggings/{tag}");
/// `/people/match?{query}`
pub const PEOPLE_MATCH: Template = Template("/people/match?{query}");
/// `/people/match?email={email}`
pub const PEOPLE_MATCH_EMAIL: Template = Template("/people/match?email={email}");
/// `/people?page={page}&per_page={per_page}`
pub const PEOPLE_PAGE: Template = paginated!("/people");
/// `/people/search?page={page}&per_page={per_page}{filters}`
pub const PEOPLE_SEARCH: Template = Template(concat!(
    "/people/search",
    "?page={page}&per_page={per_page}",
    "{filters}"
));
/// `/people/nearby?page={page}&per_page={per_page}&location={lat},{lng}&distance={dist}`
pub const PEOPLE_NEARBY: Template = Template(concat!(
    "/people/nearby",
    "?page={page}&per_page={per_page}",
    "&location={lat},{lng}&distance={dist}"
));
/// `/lists?page={page}&per_page={per_page}`
pub const LISTS_PAGE: Template = paginated!("/lists");
/// `/lists/{list_id}/people?page={page}&per_page={per_page}`
pub const LIST_PEOPLE: Template = paginated!("/lists/{list_id}/people");
/// `/tags?page={page}&per_page={per_page}`
pub const TAGS_PAGE: Template = paginated!("/tags");
/// `/tags/{tag}/people?page={page}&per_page={per_page}`
pub const TAG_PEOPLE: Template = paginated!("/tags/{tag}/people");
/// `/sites`
pub const SITES: Template = Template("/sites");
/// `/sites/{slug}/pages/basic_pages`
pub const BASIC_PAGES: Template = Template("/sites/{slug}/pages/basic_pages");
/// `/sites/{slug}/pages/blogs`
pub const BLOGS: Template = Template("/sites/{slug}/pages/blogs");
/// `/sites/{slug}/pages/blogs/{blog_id}/posts`
pub const BLOG_POSTS: Template = Template("/sites/{slug}/pages/blogs/{blog_id}/posts");
/// `/settings/contact_types`
pub const CONTACT_TYPES: Template = Template("/settings/contact_types");
/// `/settings/contact_types/{id}`
pub const CONTACT_TYPE: Template = Template("/settings/contact_types/{id}");
/// `/settings/contact_methods`
pub const CONTACT_METHODS: Template = Template("/settings/contact_methods");
/// `/settings/contact_statuses`
pub const CONTACT_STATUSES: Template = Template("/settings/contact_statuses");

/// Percent-encodes a user-supplied value for a path segment or query value
#[must_use]
pub fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Encodes `key=value` pairs into a query string, without the leading `?`
#[must_use]
pub fn encode_query<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k.as_ref()), encode(v.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

/// Resolves templates against one nation's API root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Uses `base_url` as the API root; a trailing slash is ignored
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// API root of `https://{slug}.nationbuilder.com/api/v1`
    #[must_use]
    pub fn for_nation(nation_slug: &str) -> Self {
        Self::new(format!(
            "https://{}.{NATIONBUILDER_HOST}{API_PATH}",
            encode(nation_slug)
        ))
    }

    /// The API root all templates are resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, template: Template, params: &[(&str, &str)]) -> String {
        format!("{}{}", self.base_url, template.fill(params))
    }

    fn paged(
        &self,
        template: Template,
        page: u32,
        per_page: u32,
        params: &[(&str, &str)],
    ) -> String {
        let page = page.to_string();
        let per_page = per_page.to_string();
        let mut all = vec![("page", page.as_str()), ("per_page", per_page.as_str())];
        all.extend_from_slice(params);
        self.url(template, &all)
    }

    fn with_limit(url: String, limit: Option<u32>) -> String {
        match limit {
            Some(limit) => format!("{url}?limit={limit}"),
            None => url,
        }
    }

    /// Joins a server-supplied `next` link
    ///
    /// Paths such as `/api/v1/people?__nonce=...` are joined to the origin of
    /// the API root. Absolute URLs are accepted only when they share that
    /// origin, since every request carries the nation's bearer token.
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - If the link is malformed or names another scheme, host or port
    pub fn resolve(&self, link: &str) -> Result<String, AppError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| AppError::InvalidInput(format!("invalid base url {}: {e}", self.base_url)))?;
        let joined = base
            .join(link)
            .map_err(|e| AppError::InvalidInput(format!("invalid next link {link}: {e}")))?;
        if joined.origin() != base.origin() {
            return Err(AppError::InvalidInput(format!(
                "next link {link} leaves the API origin {}",
                base.origin().ascii_serialization()
            )));
        }
        Ok(joined.to_string())
    }

    /// `GET|POST|DELETE /people/{id}`
    pub fn person(&self, id: impl Display) -> String {
        self.url(PERSON, &[("id", &encode(&id.to_string()))])
    }

    /// `POST /people`
    #[must_use]
    pub fn people(&self) -> String {
        self.url(PEOPLE, &[])
    }

    /// `GET /people/me`
    #[must_use]
    pub fn people_me(&self) -> String {
        self.url(PEOPLE_ME, &[])
    }

    /// `GET /people/{id}/register`
    pub fn person_register(&self, id: impl Display) -> String {
        self.url(PERSON_REGISTER, &[("id", &encode(&id.to_string()))])
    }

    /// `GET|POST /people/{id}/contacts`
    pub fn person_contacts(&self, id: impl Display, limit: Option<u32>) -> String {
        let url = self.url(PERSON_CONTACTS, &[("id", &encode(&id.to_string()))]);
        Self::with_limit(url, limit)
    }

    /// `POST /people/{id}/taggings`
    pub fn person_taggings(&self, id: impl Display) -> String {
        self.url(PERSON_TAGGINGS, &[("id", &encode(&id.to_string()))])
    }

    /// `DELETE /people/{id}/taggings/{tag}`
    pub fn person_tagging(&self, id: impl Display, tag: &str) -> String {
        self.url(
            PERSON_TAGGING,
            &[("id", &encode(&id.to_string())), ("tag", &encode(tag))],
        )
    }

    /// `GET /people/match?k1=v1&k2=v2`
    pub fn people_match<K: AsRef<str>, V: AsRef<str>>(&self, criteria: &[(K, V)]) -> String {
        self.url(PEOPLE_MATCH, &[("query", &encode_query(criteria))])
    }

    /// `GET /people/match?email={email}`
    #[must_use]
    pub fn people_match_email(&self, email: &str) -> String {
        self.url(PEOPLE_MATCH_EMAIL, &[("email", &encode(email))])
    }

    /// `GET /people?page={page}&per_page={per_page}`
    #[must_use]
    pub fn people_page(&self, page: u32, per_page: u32) -> String {
        self.paged(PEOPLE_PAGE, page, per_page, &[])
    }

    /// `GET /people/search?page={page}&per_page={per_page}&k1=v1...`
    pub fn people_search<K: AsRef<str>, V: AsRef<str>>(
        &self,
        filters: &[(K, V)],
        page: u32,
        per_page: u32,
    ) -> String {
        let filters = if filters.is_empty() {
            String::new()
        } else {
            format!("&{}", encode_query(filters))
        };
        self.paged(PEOPLE_SEARCH, page, per_page, &[("filters", &filters)])
    }

    /// `GET /people/nearby?page=..&per_page=..&location={lat},{lng}&distance={dist}`
    #[must_use]
    pub fn people_nearby(&self, lat: f64, lng: f64, dist: f64, page: u32, per_page: u32) -> String {
        self.paged(
            PEOPLE_NEARBY,
            page,
            per_page,
            &[
                ("lat", &lat.to_string()),
                ("lng", &lng.to_string()),
                ("dist", &dist.to_string()),
            ],
        )
    }

    /// `GET /lists?page={page}&per_page={per_page}`
    #[must_use]
    pub fn lists_page(&self, page: u32, per_page: u32) -> String {
        self.paged(LISTS_PAGE, page, per_page, &[])
    }

    /// `GET /lists/{list_id}/people?page={page}&per_page={per_page}`
    pub fn list_people(&self, list_id: impl Display, page: u32, per_page: u32) -> String {
        self.paged(
            LIST_PEOPLE,
            page,
            per_page,
            &[("list_id", &encode(&list_id.to_string()))],
        )
    }

    /// `GET /tags?page={page}&per_page={per_page}`
    #[must_use]
    pub fn tags_page(&self, page: u32, per_page: u32) -> String {
        self.paged(TAGS_PAGE, page, per_page, &[])
    }

    /// `GET /tags/{tag}/people?page={page}&per_page={per_page}`
    #[must_use]
    pub fn tag_people(&self, tag: &str, page: u32, per_page: u32) -> String {
        self.paged(TAG_PEOPLE, page, per_page, &[("tag", &encode(tag))])
    }

    /// `GET /sites`
    #[must_use]
    pub fn sites(&self) -> String {
        self.url(SITES, &[])
    }

    /// `GET|POST /sites/{slug}/pages/basic_pages`
    #[must_use]
    pub fn basic_pages(&self, site_slug: &str, limit: Option<u32>) -> String {
        let url = self.url(BASIC_PAGES, &[("slug", &encode(site_slug))]);
        Self::with_limit(url, limit)
    }

    /// `GET|POST /sites/{slug}/pages/blogs`
    #[must_use]
    pub fn blogs(&self, site_slug: &str, limit: Option<u32>) -> String {
        let url = self.url(BLOGS, &[("slug", &encode(site_slug))]);
        Self::with_limit(url, limit)
    }

    /// `GET|POST /sites/{slug}/pages/blogs/{blog_id}/posts`
    pub fn blog_posts(&self, site_slug: &str, blog_id: impl Display, limit: Option<u32>) -> String {
        let url = self.url(
            BLOG_POSTS,
            &[
                ("slug", &encode(site_slug)),
                ("blog_id", &encode(&blog_id.to_string())),
            ],
        );
        Self::with_limit(url, limit)
    }

    /// `GET|POST /settings/contact_types`
    #[must_use]
    pub fn contact_types(&self, limit: Option<u32>) -> String {
        Self::with_limit(self.url(CONTACT_TYPES, &[]), limit)
    }

    /// `PUT|DELETE /settings/contact_types/{id}`
    pub fn contact_type(&self, id: impl Display) -> String {
        self.url(CONTACT_TYPE, &[("id", &encode(&id.to_string()))])
    }

    /// `GET /settings/contact_methods`
    #[must_use]
    pub fn contact_methods(&self) -> String {
        self.url(CONTACT_METHODS, &[])
    }

    /// `GET /settings/contact_statuses`
    #[must_use]
    pub fn contact_statuses(&self) -> String {
        self.url(CONTACT_STATUSES, &[])
    }
}
