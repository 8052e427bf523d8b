use actix_web::{get, HttpResponse};

use super::types::{EntryContent, RqEntryId};
use crate::{
    api::parse_id,
    errors::{AppError, AppResult},
    models::entry::Entry,
    session::SessionClaims,
    RqDbPool,
};

// Any authenticated user may fetch any entry's content.
#[get("/{entry_id}")]
pub async fn get_content(
    pool: RqDbPool,
    entry_path: RqEntryId,
    _claims: SessionClaims,
) -> AppResult<HttpResponse> {
    let entry_id = parse_id("entry_id", &entry_path.entry_id)?;

    let mut conn = pool.get()?;
    let (entry, content) = Entry::get_with_content(&mut conn, entry_id)?
        .ok_or_else(|| AppError::resource_not_found("Entry"))?;

    Ok(HttpResponse::Ok().json(EntryContent { entry, content }))
}
