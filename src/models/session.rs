use crate::schema::sessions;
use chrono::Utc;
use diesel::{prelude::*, result::Error as DieselError, SqliteConnection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sessions live for 30 days from login.
pub const SESSION_LIFETIME_SECS: i32 = 30 * 24 * 60 * 60;

#[derive(Queryable, Identifiable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = sessions)]
pub struct Session {
    pub id: i32,
    pub session_id: String,
    pub user_id: i32,
    pub expires_at: i32,
    pub created_at: i32,
    pub last_accessed: i32,
}

#[derive(Insertable)]
#[diesel(table_name = sessions)]
struct NewSession {
    session_id: String,
    user_id: i32,
    expires_at: i32,
    created_at: i32,
    last_accessed: i32,
}

impl Session {
    pub fn create(conn: &mut SqliteConnection, user_id: i32) -> Result<Self, DieselError> {
        let now = Utc::now().timestamp() as i32;
        let new_session = NewSession {
            session_id: Uuid::new_v4().to_string(),
            user_id,
            expires_at: now + SESSION_LIFETIME_SECS,
            created_at: now,
            last_accessed: now,
        };

        diesel::insert_into(sessions::table)
            .values(&new_session)
            .returning(Session::as_returning())
            .get_result(conn)
    }

    /// Get session by session_id if not expired
    pub fn get_valid(
        conn: &mut SqliteConnection,
        session_id: &str,
    ) -> Result<Option<Self>, DieselError> {
        let now = Utc::now().timestamp() as i32;

        sessions::table
            .filter(sessions::session_id.eq(session_id))
            .filter(sessions::expires_at.gt(now))
            .first(conn)
            .optional()
    }

    pub fn touch(&self, conn: &mut SqliteConnection) -> Result<(), DieselError> {
        let now = Utc::now().timestamp() as i32;
        diesel::update(sessions::table.find(self.id))
            .set(sessions::last_accessed.eq(now))
            .execute(conn)
            .map(|_| ())
    }

    pub fn delete(conn: &mut SqliteConnection, session_id: &str) -> Result<(), DieselError> {
        diesel::delete(sessions::table.filter(sessions::session_id.eq(session_id)))
            .execute(conn)
            .map(|_| ())
    }

    pub fn cleanup_expired(conn: &mut SqliteConnection) -> Result<usize, DieselError> {
        let now = Utc::now().timestamp() as i32;
        diesel::delete(sessions::table.filter(sessions::expires_at.le(now))).execute(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{get_test_db_connection, insert_user};

    #[test]
    fn test_create_and_get_valid() {
        let mut conn = get_test_db_connection();
        let user_id = insert_user(&mut conn, "u@test.io");

        let session = Session::create(&mut conn, user_id).unwrap();
        assert_eq!(session.user_id, user_id);
        assert_eq!(session.expires_at - session.created_at, SESSION_LIFETIME_SECS);

        let found = Session::get_valid(&mut conn, &session.session_id).unwrap();
        assert_eq!(found.map(|s| s.id), Some(session.id));
    }

    #[test]
    fn test_unknown_session_is_none() {
        let mut conn = get_test_db_connection();
        assert!(Session::get_valid(&mut conn, "nope").unwrap().is_none());
    }

    #[test]
    fn test_expired_session_is_not_valid() {
        let mut conn = get_test_db_connection();
        let user_id = insert_user(&mut conn, "u@test.io");
        let session = Session::create(&mut conn, user_id).unwrap();

        diesel::update(sessions::table.find(session.id))
            .set(sessions::expires_at.eq(1))
            .execute(&mut conn)
            .unwrap();

        assert!(Session::get_valid(&mut conn, &session.session_id).unwrap().is_none());
        assert_eq!(Session::cleanup_expired(&mut conn).unwrap(), 1);
    }

    #[test]
    fn test_delete_session() {
        let mut conn = get_test_db_connection();
        let user_id = insert_user(&mut conn, "u@test.io");
        let session = Session::create(&mut conn, user_id).unwrap();

        Session::delete(&mut conn, &session.session_id).unwrap();
        assert!(Session::get_valid(&mut conn, &session.session_id).unwrap().is_none());
    }
}
