/// Client entry point
pub mod client;
/// Application configuration module
pub mod config;
/// Endpoint registry
pub mod endpoints;
/// Resource service interfaces
pub mod interfaces;
/// Resource service implementations on the client
pub mod services;
/// Session management
pub mod session;
