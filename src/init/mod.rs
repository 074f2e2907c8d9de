pub mod logging;
pub mod routes;
pub mod config;
pub mod schema;

pub use config::init_config;
pub use logging::init_logging;
pub use routes::init_routes;
pub use schema::init_schema;
