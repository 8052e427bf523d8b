use super::{content::Content, feed::Feed};
use crate::schema::*;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Entry metadata. The content payload is never part of this struct's JSON.
#[derive(Debug, Serialize, Deserialize, Queryable, Identifiable, Associations, PartialEq)]
#[diesel(belongs_to(Feed))]
#[diesel(table_name = entries)]
pub struct Entry {
    pub id: i32,
    pub feed_id: i32,
    #[serde(skip_serializing)]
    pub content_id: i32,
    pub guid: String,
    pub title: String,
    pub link: String,
    pub author: Option<String>,
    pub published: i32,
}

#[derive(Debug, Default, Insertable)]
#[diesel(table_name = entries)]
pub struct NewEntry<'a> {
    pub feed_id: i32,
    pub content_id: i32,
    pub guid: &'a str,
    pub title: &'a str,
    pub link: &'a str,
    pub author: Option<&'a str>,
    pub published: i32,
}

impl<'a> NewEntry<'a> {
    pub fn insert(&self, conn: &mut SqliteConnection) -> QueryResult<Entry> {
        diesel::insert_into(entries::table)
            .values(self)
            .get_result(conn)
            .map_err(|e| {
                log::warn!("Error inserting entry: {e:?}");
                e
            })
    }
}

impl Entry {
    pub fn exists(conn: &mut SqliteConnection, entry_id: i32) -> QueryResult<bool> {
        diesel::select(diesel::dsl::exists(entries::table.find(entry_id))).get_result(conn)
    }

    pub fn get_with_content(
        conn: &mut SqliteConnection,
        entry_id: i32,
    ) -> QueryResult<Option<(Entry, Content)>> {
        entries::table
            .inner_join(contents::table)
            .filter(entries::id.eq(entry_id))
            .select((entries::all_columns, contents::all_columns))
            .first::<(Entry, Content)>(conn)
            .optional()
    }
}
