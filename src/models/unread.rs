use super::entry::Entry;
use crate::schema::*;
use diesel::{prelude::*, result::Error as DieselError};
use serde::{Deserialize, Serialize};

/// Marks one entry as unread for one user. Absence of a row means read.
#[derive(Debug, Serialize, Deserialize, Queryable, Insertable, Identifiable, PartialEq)]
#[diesel(table_name = unread)]
#[diesel(primary_key(user_id, entry_id))]
pub struct Unread {
    pub user_id: i32,
    pub entry_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnreadAction {
    Mark,
    Clear,
}

impl Unread {
    /// Applies `action` for (user, entry) in a single transaction.
    ///
    /// Returns `Ok(true)` when a row was created or deleted and `Ok(false)`
    /// when the requested state already held. A missing entry is
    /// `DieselError::NotFound`.
    pub fn toggle(
        conn: &mut SqliteConnection,
        user_id: i32,
        entry_id: i32,
        action: UnreadAction,
    ) -> Result<bool, DieselError> {
        conn.transaction(|conn| {
            if !Entry::exists(conn, entry_id)? {
                return Err(DieselError::NotFound);
            }

            let affected = match action {
                UnreadAction::Mark => diesel::insert_or_ignore_into(unread::table)
                    .values(&Unread { user_id, entry_id })
                    .execute(conn)?,
                UnreadAction::Clear => diesel::delete(unread::table.find((user_id, entry_id)))
                    .execute(conn)?,
            };
            Ok(affected > 0)
        })
    }

    /// Live count of the user's unread markers on entries of `feed_id`.
    pub fn count_for_feed(
        conn: &mut SqliteConnection,
        user_id: i32,
        feed_id: i32,
    ) -> Result<i64, DieselError> {
        entries::table
            .inner_join(unread::table)
            .filter(entries::feed_id.eq(feed_id))
            .filter(unread::user_id.eq(user_id))
            .count()
            .get_result(conn)
    }
}
