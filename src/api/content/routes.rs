use super::handlers;
use actix_web::{web, Scope};

pub fn routes() -> Scope {
    web::scope("/content").service(handlers::get_content)
}
