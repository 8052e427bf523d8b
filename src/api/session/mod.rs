pub mod handlers;
pub mod routes;
pub mod types;

pub use routes::{login_resource, routes};
