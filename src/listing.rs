//! Paginated, access-filtered entry listings.
//!
//! Every listing endpoint goes through [`list_entries`]: the base scope
//! (all entries or one feed) is narrowed by an [`AccessFilter`], counted, and
//! then windowed by a [`PageRequest`] cursor, newest first.

use crate::models::entry::Entry;
use crate::schema::{entries, subscriptions, unread};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use serde::Serialize;

/// Upper bound on entries returned by one listing call.
pub const MAX_ENTRY_COUNT: i64 = 500;

/// Which entries a listing starts from, before access control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryScope {
    All,
    Feed(i32),
}

/// The two mutually exclusive visibility rules for a listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccessFilter {
    /// Entries of feeds the user is subscribed to.
    Subscribed,
    /// Entries carrying an unread marker for the user, subscribed or not.
    Unread,
}

impl AccessFilter {
    pub fn from_unread_flag(unread: bool) -> Self {
        if unread {
            AccessFilter::Unread
        } else {
            AccessFilter::Subscribed
        }
    }
}

/// Cursor and page size. `start == 0` means "from the newest entry".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    pub start: i32,
    pub count: i64,
}

impl PageRequest {
    /// Clamps `count` into `0..=MAX_ENTRY_COUNT`.
    pub fn new(start: i32, count: i64) -> Self {
        Self {
            start,
            count: count.clamp(0, MAX_ENTRY_COUNT),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, MAX_ENTRY_COUNT)
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct EntryPage {
    /// Matching entries before the cursor and limit are applied.
    pub total: i64,
    pub entries: Vec<Entry>,
}

type BoxedEntries = entries::BoxedQuery<'static, Sqlite>;

fn filtered_entries(user_id: i32, scope: EntryScope, filter: AccessFilter) -> BoxedEntries {
    let mut query = entries::table.into_boxed();

    if let EntryScope::Feed(feed_id) = scope {
        query = query.filter(entries::feed_id.eq(feed_id));
    }

    // Both relations are unique per user, so the subselects match the
    // join row for row.
    match filter {
        AccessFilter::Subscribed => query.filter(
            entries::feed_id.eq_any(
                subscriptions::table
                    .filter(subscriptions::user_id.eq(user_id))
                    .select(subscriptions::feed_id),
            ),
        ),
        AccessFilter::Unread => query.filter(
            entries::id.eq_any(
                unread::table
                    .filter(unread::user_id.eq(user_id))
                    .select(unread::entry_id),
            ),
        ),
    }
}

pub fn list_entries(
    conn: &mut SqliteConnection,
    user_id: i32,
    scope: EntryScope,
    filter: AccessFilter,
    page: PageRequest,
) -> QueryResult<EntryPage> {
    let total = filtered_entries(user_id, scope, filter)
        .count()
        .get_result::<i64>(conn)?;

    let mut query = filtered_entries(user_id, scope, filter);
    if page.start != 0 {
        query = query.filter(entries::id.lt(page.start));
    }

    let entries = query
        .order(entries::id.desc())
        .limit(page.count)
        .load::<Entry>(conn)?;

    log::debug!(
        "list_entries user={} scope={:?} filter={:?} page={:?} total={} returned={}",
        user_id,
        scope,
        filter,
        page,
        total,
        entries.len()
    );

    Ok(EntryPage { total, entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::unread::{Unread, UnreadAction};
    use crate::test_helpers::{
        get_test_db_connection, insert_entries, insert_feed, insert_user, subscribe,
    };

    fn ids(page: &EntryPage) -> Vec<i32> {
        page.entries.iter().map(|e| e.id).collect()
    }

    struct Fixture {
        conn: SqliteConnection,
        user_id: i32,
        followed: i32,
        other: i32,
        followed_ids: Vec<i32>,
        other_ids: Vec<i32>,
    }

    fn fixture() -> Fixture {
        let mut conn = get_test_db_connection();
        let user_id = insert_user(&mut conn, "u@test.io");
        let followed = insert_feed(&mut conn, "http://followed.test/rss");
        let other = insert_feed(&mut conn, "http://other.test/rss");
        subscribe(&mut conn, user_id, followed);
        let followed_ids = insert_entries(&mut conn, followed, 10);
        let other_ids = insert_entries(&mut conn, other, 3);
        Fixture {
            conn,
            user_id,
            followed,
            other,
            followed_ids,
            other_ids,
        }
    }

    #[test]
    fn test_count_is_clamped() {
        assert_eq!(PageRequest::new(0, 10_000).count, MAX_ENTRY_COUNT);
        assert_eq!(PageRequest::new(0, -3).count, 0);
        assert_eq!(PageRequest::new(7, 20), PageRequest { start: 7, count: 20 });
        assert_eq!(PageRequest::default().count, MAX_ENTRY_COUNT);
    }

    #[test]
    fn test_subscribed_listing_hides_unfollowed_feeds() {
        let mut f = fixture();
        let page = list_entries(
            &mut f.conn,
            f.user_id,
            EntryScope::All,
            AccessFilter::Subscribed,
            PageRequest::default(),
        )
        .unwrap();

        assert_eq!(page.total, 10);
        let mut expected = f.followed_ids.clone();
        expected.reverse();
        assert_eq!(ids(&page), expected);
        assert!(page.entries.iter().all(|e| e.feed_id == f.followed));
    }

    #[test]
    fn test_cursor_walks_pages_newest_first() {
        let mut f = fixture();
        let scope = EntryScope::Feed(f.followed);

        let first = list_entries(
            &mut f.conn,
            f.user_id,
            scope,
            AccessFilter::Subscribed,
            PageRequest::new(0, 4),
        )
        .unwrap();
        assert_eq!(first.total, 10);
        assert_eq!(ids(&first), vec![
            f.followed_ids[9],
            f.followed_ids[8],
            f.followed_ids[7],
            f.followed_ids[6],
        ]);

        let cursor = *ids(&first).last().unwrap();
        let second = list_entries(
            &mut f.conn,
            f.user_id,
            scope,
            AccessFilter::Subscribed,
            PageRequest::new(cursor, 4),
        )
        .unwrap();
        assert_eq!(second.total, 10);
        assert!(ids(&second).iter().all(|id| *id < cursor));
        assert!(ids(&second).windows(2).all(|w| w[0] > w[1]));
        assert_eq!(second.entries.len(), 4);

        let last = list_entries(
            &mut f.conn,
            f.user_id,
            scope,
            AccessFilter::Subscribed,
            PageRequest::new(f.followed_ids[1], 4),
        )
        .unwrap();
        assert_eq!(ids(&last), vec![f.followed_ids[0]]);
        assert_eq!(last.total, 10);
    }

    #[test]
    fn test_unread_listing_ignores_subscriptions() {
        let mut f = fixture();
        Unread::toggle(&mut f.conn, f.user_id, f.followed_ids[2], UnreadAction::Mark).unwrap();
        Unread::toggle(&mut f.conn, f.user_id, f.other_ids[0], UnreadAction::Mark).unwrap();

        let page = list_entries(
            &mut f.conn,
            f.user_id,
            EntryScope::All,
            AccessFilter::Unread,
            PageRequest::default(),
        )
        .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(ids(&page), vec![f.other_ids[0], f.followed_ids[2]]);

        let scoped = list_entries(
            &mut f.conn,
            f.user_id,
            EntryScope::Feed(f.other),
            AccessFilter::Unread,
            PageRequest::default(),
        )
        .unwrap();
        assert_eq!(ids(&scoped), vec![f.other_ids[0]]);
    }

    #[test]
    fn test_unknown_feed_is_empty() {
        let mut f = fixture();
        let page = list_entries(
            &mut f.conn,
            f.user_id,
            EntryScope::Feed(4242),
            AccessFilter::Subscribed,
            PageRequest::default(),
        )
        .unwrap();
        assert_eq!(page, EntryPage { total: 0, entries: vec![] });
    }

    #[test]
    fn test_zero_count_still_reports_total() {
        let mut f = fixture();
        let page = list_entries(
            &mut f.conn,
            f.user_id,
            EntryScope::All,
            AccessFilter::Subscribed,
            PageRequest::new(0, 0),
        )
        .unwrap();
        assert_eq!(page.total, 10);
        assert!(page.entries.is_empty());
    }

    #[test]
    fn test_page_is_capped_but_total_is_not() {
        let mut conn = get_test_db_connection();
        let user_id = insert_user(&mut conn, "u@test.io");
        let feed_id = insert_feed(&mut conn, "http://big.test/rss");
        subscribe(&mut conn, user_id, feed_id);
        let ids = insert_entries(&mut conn, feed_id, 520);

        let page = list_entries(
            &mut conn,
            user_id,
            EntryScope::Feed(feed_id),
            AccessFilter::Subscribed,
            PageRequest::new(0, 100_000),
        )
        .unwrap();
        assert_eq!(page.total, 520);
        assert_eq!(page.entries.len(), MAX_ENTRY_COUNT as usize);
        assert_eq!(page.entries[0].id, ids[519]);
        assert_eq!(page.entries[499].id, ids[20]);
    }

    #[test]
    fn test_other_users_subscriptions_do_not_leak() {
        let mut f = fixture();
        let stranger = insert_user(&mut f.conn, "stranger@test.io");
        subscribe(&mut f.conn, stranger, f.other);

        let page = list_entries(
            &mut f.conn,
            f.user_id,
            EntryScope::Feed(f.other),
            AccessFilter::Subscribed,
            PageRequest::default(),
        )
        .unwrap();
        assert_eq!(page.total, 0);
    }
}
