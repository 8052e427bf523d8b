use super::{content, entries, session, subscriptions, unread};
use crate::errors::extractors;
use actix_web::web;

/// Registers every session-protected resource. Login is registered
/// separately (see [`session::login_resource`]) so it can carry its own
/// rate limiter.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(extractors::query_error))
        .app_data(web::PathConfig::default().error_handler(extractors::path_error))
        .app_data(web::JsonConfig::default().error_handler(extractors::json_error))
        .service(content::routes())
        .service(entries::routes())
        .service(session::routes())
        .service(subscriptions::routes())
        .service(unread::routes());
}
