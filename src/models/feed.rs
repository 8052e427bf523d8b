use crate::schema::*;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Queryable, Identifiable, PartialEq)]
#[diesel(table_name = feeds)]
pub struct Feed {
    pub id: i32,
    pub url: String,
    pub title: String,
    /// zero if never checked
    pub last_checked: i32,
    pub error_message: Option<String>,
}

#[derive(Debug, Default, Insertable)]
#[diesel(table_name = feeds)]
pub struct NewFeed<'a> {
    pub url: &'a str,
    pub title: &'a str,
}

impl<'a> NewFeed<'a> {
    pub fn insert(&self, conn: &mut SqliteConnection) -> QueryResult<Feed> {
        diesel::insert_into(feeds::table)
            .values(self)
            .get_result(conn)
            .map_err(|e| {
                log::warn!("Error inserting feed: {e:?}");
                e
            })
    }
}
