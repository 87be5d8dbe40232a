/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
///
/// Blank values are treated as missing.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// Parsed value if found and valid, None otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val.trim().parse::<T>().ok(),
        _ => None,
    }
}

/// Credentials read from a `slug: <value>` / `api_key: <value>` file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCredentials {
    /// Nation slug, if the file had a `slug` line
    pub slug: Option<String>,
    /// API token, if the file had an `api_key` line
    pub api_key: Option<String>,
}

/// Parses the contents of a colon-delimited credentials file
///
/// Lines without a colon, unknown keys and empty values are ignored, so a
/// malformed file simply yields missing fields.
pub fn parse_credentials(contents: &str) -> FileCredentials {
    let mut creds = FileCredentials::default();
    for line in contents.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "slug" => creds.slug = Some(value.to_string()),
            "api_key" => creds.api_key = Some(value.to_string()),
            _ => {}
        }
    }
    creds
}
