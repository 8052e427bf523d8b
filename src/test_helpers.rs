use crate::models::{
    content::NewContent,
    entry::NewEntry,
    feed::NewFeed,
    subscription::NewSubscription,
    user::{NewUser, User},
};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::MigrationHarness;

pub fn get_test_db_connection() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:")
        .unwrap_or_else(|_| panic!("Error connecting to in-memory SQLite database"));

    conn.run_pending_migrations(crate::MIGRATIONS)
        .expect("Failed to run migrations");
    conn
}

pub fn insert_user(conn: &mut SqliteConnection, email: &str) -> i32 {
    let new_user = NewUser {
        email: email.to_string(),
        password: "password".to_string(),
    };
    User::create(conn, &new_user).expect("Failed to create user").id
}

pub fn insert_feed(conn: &mut SqliteConnection, url: &str) -> i32 {
    NewFeed { url, title: url }
        .insert(conn)
        .expect("Failed to insert feed")
        .id
}

pub fn subscribe(conn: &mut SqliteConnection, user_id: i32, feed_id: i32) -> i32 {
    NewSubscription {
        user_id,
        feed_id,
        name: "test subscription",
        created_at: 0,
    }
    .insert(conn)
    .expect("Failed to subscribe")
    .id
}

/// Inserts `count` entries with content into `feed_id`, returning their ids in
/// insertion order.
pub fn insert_entries(conn: &mut SqliteConnection, feed_id: i32, count: usize) -> Vec<i32> {
    (0..count)
        .map(|i| {
            let data = format!("<p>body {i}</p>");
            let content = NewContent {
                content_type: "text/html",
                data: &data,
            }
            .insert(conn)
            .expect("Failed to insert content");

            let guid = format!("{feed_id}-{i}");
            let link = format!("http://test.com/{feed_id}/{i}");
            let title = format!("test_title_{i}");
            NewEntry {
                feed_id,
                content_id: content.id,
                guid: &guid,
                title: &title,
                link: &link,
                published: i as i32,
                ..Default::default()
            }
            .insert(conn)
            .expect("Failed to insert entry")
            .id
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::users;

    #[test]
    fn test_in_memory_db_is_migrated_and_empty() {
        let mut conn = get_test_db_connection();

        let count: i64 = users::table
            .count()
            .get_result(&mut conn)
            .expect("Failed to query test database");
        assert_eq!(count, 0);
    }
}
