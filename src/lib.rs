pub mod context;
pub mod handles;
pub mod init;
pub mod models;
pub mod params;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
