use super::handlers;
use actix_web::{web, Scope};

pub fn routes() -> Scope {
    web::scope("/unread")
        .service(handlers::mark_unread)
        .service(handlers::mark_read)
}
