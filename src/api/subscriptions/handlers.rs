use actix_web::{get, HttpResponse};

use super::types::SubscriptionsResponse;
use crate::{
    errors::AppResult, models::subscription::Subscription, session::SessionClaims, RqDbPool,
};

#[get("")]
pub async fn get_all_subscriptions(
    pool: RqDbPool,
    claims: SessionClaims,
) -> AppResult<HttpResponse> {
    let mut conn = pool.get()?;
    let data = Subscription::summaries_for_user(&mut conn, claims.sub)?;

    Ok(HttpResponse::Ok().json(SubscriptionsResponse { data }))
}
