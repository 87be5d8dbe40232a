/// Blog service interface
pub mod blogs;
/// Contact service interface
pub mod contacts;
/// List service interface
pub mod lists;
/// Page and site service interface
pub mod pages;
/// People service interface
pub mod people;
/// Tag service interface
pub mod tags;
