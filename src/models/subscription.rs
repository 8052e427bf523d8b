use super::{unread::Unread, user::User};
use crate::schema::*;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Queryable, Identifiable, Associations, PartialEq)]
#[diesel(belongs_to(User))]
#[diesel(table_name = subscriptions)]
pub struct Subscription {
    pub id: i32,
    pub user_id: i32,
    pub feed_id: i32,
    pub name: String,
    pub created_at: i32,
}

#[derive(Debug, Default, Insertable)]
#[diesel(table_name = subscriptions)]
pub struct NewSubscription<'a> {
    pub user_id: i32,
    pub feed_id: i32,
    pub name: &'a str,
    pub created_at: i32,
}

/// A subscription together with the user's current unread count for its feed.
#[derive(Debug, Serialize, PartialEq)]
pub struct SubscriptionSummary {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub unread_count: i64,
}

impl<'a> NewSubscription<'a> {
    pub fn insert(&self, conn: &mut SqliteConnection) -> QueryResult<Subscription> {
        diesel::insert_into(subscriptions::table)
            .values(self)
            .get_result(conn)
            .map_err(|e| {
                log::warn!("Error inserting subscription: {:?}", e);
                e
            })
    }
}

impl Subscription {
    pub fn get_all_for_user(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> QueryResult<Vec<Subscription>> {
        subscriptions::table
            .filter(subscriptions::user_id.eq(user_id))
            .order(subscriptions::id.asc())
            .load::<Subscription>(conn)
    }

    /// One summary per subscription of `user_id`. Each unread count is
    /// computed against the unread relation at call time.
    pub fn summaries_for_user(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> QueryResult<Vec<SubscriptionSummary>> {
        Self::get_all_for_user(conn, user_id)?
            .into_iter()
            .map(|subscription| -> QueryResult<SubscriptionSummary> {
                let unread_count = Unread::count_for_feed(conn, user_id, subscription.feed_id)?;
                Ok(SubscriptionSummary {
                    subscription,
                    unread_count,
                })
            })
            .collect()
    }
}
