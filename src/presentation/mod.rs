/// Blog and blog post records
pub mod blog;
/// Contact, contact type, method and status records
pub mod contact;
/// Saved list records
pub mod list;
/// Site and basic page records
pub mod page;
/// Person records
pub mod person;
/// Tag and tagging records
pub mod tag;

pub use blog::*;
pub use contact::*;
pub use list::*;
pub use page::*;
pub use person::*;
pub use tag::*;
