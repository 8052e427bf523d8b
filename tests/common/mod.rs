#![allow(dead_code)]

use actix_web::{cookie::Cookie, web, App};
use diesel::r2d2::{self, ConnectionManager};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::MigrationHarness;
use feedline::{
    api,
    models::{
        content::NewContent,
        entry::NewEntry,
        feed::NewFeed,
        session::Session,
        subscription::NewSubscription,
        user::{NewUser, User},
    },
    security::SecurityHeaders,
    DbPool, MIGRATIONS,
};
use tempfile::TempDir;

pub const PASSWORD: &str = "correct horse";

pub fn create_test_db() -> (TempDir, DbPool) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");

    let manager = ConnectionManager::<SqliteConnection>::new(db_path.display().to_string());
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .expect("Failed to create pool");

    let mut conn = pool.get().expect("Failed to get connection");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");

    (temp_dir, pool)
}

pub fn create_test_app(
    pool: DbPool,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        Config = (),
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(pool))
        .wrap(SecurityHeaders)
        .service(api::health::routes())
        .service(api::session::login_resource())
        .configure(api::routes::configure)
}

/// A user with a live session.
pub struct TestUser {
    pub id: i32,
    pub email: String,
    pub session_id: String,
}

impl TestUser {
    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::new("session_id", self.session_id.clone())
    }
}

pub fn create_user(pool: &DbPool, email: &str) -> TestUser {
    let mut conn = pool.get().expect("Failed to get connection");
    let user = User::create(
        &mut conn,
        &NewUser {
            email: email.to_string(),
            password: PASSWORD.to_string(),
        },
    )
    .expect("Failed to create user");
    let session = Session::create(&mut conn, user.id).expect("Failed to create session");

    TestUser {
        id: user.id,
        email: user.login_email,
        session_id: session.session_id,
    }
}

pub fn create_feed(pool: &DbPool, url: &str) -> i32 {
    let mut conn = pool.get().expect("Failed to get connection");
    NewFeed { url, title: url }
        .insert(&mut conn)
        .expect("Failed to insert feed")
        .id
}

pub fn subscribe(pool: &DbPool, user_id: i32, feed_id: i32) {
    let mut conn = pool.get().expect("Failed to get connection");
    NewSubscription {
        user_id,
        feed_id,
        name: "subscription",
        created_at: 0,
    }
    .insert(&mut conn)
    .expect("Failed to subscribe");
}

/// Inserts `count` entries (each with content) and returns their ids.
pub fn create_entries(pool: &DbPool, feed_id: i32, count: usize) -> Vec<i32> {
    let mut conn = pool.get().expect("Failed to get connection");
    (0..count)
        .map(|i| {
            let data = format!("<p>entry {feed_id}/{i}</p>");
            let content = NewContent {
                content_type: "text/html",
                data: &data,
            }
            .insert(&mut conn)
            .expect("Failed to insert content");

            let guid = format!("urn:{feed_id}:{i}");
            NewEntry {
                feed_id,
                content_id: content.id,
                guid: &guid,
                title: "title",
                link: "http://example.com/",
                published: i as i32,
                ..Default::default()
            }
            .insert(&mut conn)
            .expect("Failed to insert entry")
            .id
        })
        .collect()
}
