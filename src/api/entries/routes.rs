use super::handlers;
use actix_web::{web, Scope};

pub fn routes() -> Scope {
    web::scope("/entries")
        .service(handlers::get_all_entries)
        .service(handlers::get_feed_entries)
}
