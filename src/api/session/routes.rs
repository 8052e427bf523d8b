use super::handlers;
use crate::errors::extractors;
use actix_web::{guard, web, Resource, Scope};

pub fn routes() -> Scope {
    web::scope("/session")
        .service(handlers::get_session)
        .service(handlers::delete_session)
}

/// `POST /session`. Must be registered before [`routes`]; the method guard
/// lets GET and DELETE fall through to the session scope.
pub fn login_resource() -> Resource {
    web::resource("/session")
        .guard(guard::Post())
        .app_data(web::JsonConfig::default().error_handler(extractors::json_error))
        .route(web::post().to(handlers::login))
}
