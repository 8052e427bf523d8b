use actix_web::{delete, put, HttpResponse};
use diesel::result::Error as DieselError;
use serde_json::json;

use super::types::RqUnreadEntryId;
use crate::{
    api::parse_id,
    errors::{AppError, AppResult},
    log_user_action,
    models::unread::{Unread, UnreadAction},
    session::SessionClaims,
    RqDbPool,
};

#[put("/{entry_id}")]
pub async fn mark_unread(
    pool: RqDbPool,
    entry_path: RqUnreadEntryId,
    claims: SessionClaims,
) -> AppResult<HttpResponse> {
    toggle(&pool, &entry_path.entry_id, &claims, UnreadAction::Mark)
}

#[delete("/{entry_id}")]
pub async fn mark_read(
    pool: RqDbPool,
    entry_path: RqUnreadEntryId,
    claims: SessionClaims,
) -> AppResult<HttpResponse> {
    toggle(&pool, &entry_path.entry_id, &claims, UnreadAction::Clear)
}

fn toggle(
    pool: &RqDbPool,
    raw_entry_id: &str,
    claims: &SessionClaims,
    action: UnreadAction,
) -> AppResult<HttpResponse> {
    let entry_id = parse_id("entry_id", raw_entry_id)?;

    let mut conn = pool.get()?;
    let changed =
        Unread::toggle(&mut conn, claims.sub, entry_id, action).map_err(|e| match e {
            DieselError::NotFound => AppError::resource_not_found("Entry"),
            e => e.into(),
        })?;

    if changed {
        log_user_action!(
            claims.sub,
            "toggle_unread",
            json!({ "entry_id": entry_id, "unread": action == UnreadAction::Mark })
        );
    }

    Ok(HttpResponse::Ok().json(json!({})))
}
