use actix_web::web;
use serde::{Deserialize, Serialize};

use crate::models::{content::Content, entry::Entry};

#[derive(Debug, Deserialize)]
pub struct EntryPath {
    pub entry_id: String,
}

pub type RqEntryId = web::Path<EntryPath>;

/// An entry with its content payload attached.
#[derive(Debug, Serialize)]
pub struct EntryContent {
    #[serde(flatten)]
    pub entry: Entry,
    pub content: Content,
}
