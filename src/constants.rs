/// User agent string sent with every request to identify this client to NationBuilder
pub const USER_AGENT: &str = concat!("nationbuilder-client/", env!("CARGO_PKG_VERSION"));
/// Host suffix appended to the nation slug
pub const NATIONBUILDER_HOST: &str = "nationbuilder.com";
/// Path prefix of the v1 REST API
pub const API_PATH: &str = "/api/v1";
/// Default number of records per page for counted pagination (the API caps it at 100)
pub const DEFAULT_PER_PAGE: u32 = 100;
/// Largest page size the API accepts
pub const MAX_PER_PAGE: u32 = 100;
/// Default `limit` for link-paginated resources such as pages and blog posts
pub const DEFAULT_LIMIT: u32 = 100;
/// Miles per kilometre, used by the nearby search when the distance is given in km
pub const MILES_PER_KM: f64 = 0.621371;
/// Error code returned with a 400 response when an email lookup has no match
pub const NO_MATCHES_CODE: &str = "no_matches";
/// Environment variable holding the API token
pub const ENV_API_TOKEN: &str = "NATIONBUILDER_API_TOKEN";
/// Environment variable holding the nation slug
pub const ENV_NATION_SLUG: &str = "NATION_SLUG";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "NATIONBUILDER_BASE_URL";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT: &str = "NATIONBUILDER_TIMEOUT";
/// Environment variable that disables TLS certificate verification when `true`
pub const ENV_ACCEPT_INVALID_CERTS: &str = "NATIONBUILDER_ACCEPT_INVALID_CERTS";
/// Environment variable holding the default page size
pub const ENV_PER_PAGE: &str = "NATIONBUILDER_PER_PAGE";
