/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// HTTP request issuing and response validation
pub mod http;
/// Generic paginator for counted and link-following resources
pub mod pagination;
/// Request payloads wrapped under their resource key
pub mod requests;
/// Response envelopes
pub mod responses;
