use crate::schema::*;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Full payload of an entry, loaded only on request.
#[derive(Debug, Serialize, Deserialize, Queryable, Identifiable, PartialEq)]
#[diesel(table_name = contents)]
pub struct Content {
    pub id: i32,
    pub content_type: String,
    pub data: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = contents)]
pub struct NewContent<'a> {
    pub content_type: &'a str,
    pub data: &'a str,
}

impl<'a> NewContent<'a> {
    pub fn insert(&self, conn: &mut SqliteConnection) -> QueryResult<Content> {
        diesel::insert_into(contents::table)
            .values(self)
            .get_result(conn)
    }
}
