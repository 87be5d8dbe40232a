// Common utilities for unit tests

use mockito::{Matcher, ServerGuard};
use nationbuilder_client::prelude::*;

pub const TOKEN: &str = "test-token";

/// Creates a client for nation `acme` pointed at the mock server
pub fn test_client(server: &ServerGuard) -> Client {
    Client::new(Config::new("acme", TOKEN).with_base_url(api_root(server)))
}

/// The API root on the mock server
pub fn api_root(server: &ServerGuard) -> String {
    format!("{}/api/v1", server.url())
}

/// Matches `page` and `per_page` query parameters
pub fn page_query(page: u32, per_page: u32) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("page".into(), page.to_string()),
        Matcher::UrlEncoded("per_page".into(), per_page.to_string()),
    ])
}
