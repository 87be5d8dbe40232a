/// Blog service implementation
pub mod blog_service;
/// Contact service implementation
pub mod contact_service;
/// List service implementation
pub mod list_service;
/// Page service implementation
pub mod page_service;
/// People service implementation
pub mod people_service;
/// Tag service implementation
pub mod tag_service;

pub use crate::application::interfaces::blogs::*;
pub use crate::application::interfaces::contacts::*;
pub use crate::application::interfaces::lists::*;
pub use crate::application::interfaces::pages::*;
pub use crate::application::interfaces::people::*;
pub use crate::application::interfaces::tags::*;

use crate::constants::MAX_PER_PAGE;

/// Keeps a page size within what the API accepts
pub(crate) fn page_size(per_page: u32) -> u32 {
    per_page.clamp(1, MAX_PER_PAGE)
}
