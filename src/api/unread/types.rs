use actix_web::web;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UnreadPath {
    pub entry_id: String,
}

pub type RqUnreadEntryId = web::Path<UnreadPath>;
