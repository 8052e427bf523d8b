use actix_web::{get, HttpResponse};

use super::types::{RqFeedId, RqListingQuery};
use crate::{
    api::parse_id,
    errors::AppResult,
    listing::{self, EntryScope},
    session::SessionClaims,
    RqDbPool,
};

#[get("")]
pub async fn get_all_entries(
    pool: RqDbPool,
    query: RqListingQuery,
    claims: SessionClaims,
) -> AppResult<HttpResponse> {
    list(&pool, &query, &claims, EntryScope::All)
}

#[get("/{feed_id}")]
pub async fn get_feed_entries(
    pool: RqDbPool,
    feed_path: RqFeedId,
    query: RqListingQuery,
    claims: SessionClaims,
) -> AppResult<HttpResponse> {
    let feed_id = parse_id("feed_id", &feed_path.feed_id)?;
    list(&pool, &query, &claims, EntryScope::Feed(feed_id))
}

fn list(
    pool: &RqDbPool,
    query: &RqListingQuery,
    claims: &SessionClaims,
    scope: EntryScope,
) -> AppResult<HttpResponse> {
    let page = query.page()?;
    let filter = query.access_filter();

    let mut conn = pool.get()?;
    let result = listing::list_entries(&mut conn, claims.sub, scope, filter, page)?;

    Ok(HttpResponse::Ok().json(result))
}
