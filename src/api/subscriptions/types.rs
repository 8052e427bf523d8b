use serde::Serialize;

use crate::models::subscription::SubscriptionSummary;

#[derive(Debug, Serialize)]
pub struct SubscriptionsResponse {
    pub data: Vec<SubscriptionSummary>,
}
