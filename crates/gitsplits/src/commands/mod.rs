pub mod allocate;
pub mod assist;
pub mod reputation;
pub mod route;
pub mod version;
