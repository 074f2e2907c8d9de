pub mod list_service;
pub mod register_service;
