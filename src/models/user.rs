use crate::schema::*;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Queryable, Identifiable)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub login_email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: i32,
    pub is_active: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
struct InsertableUser {
    login_email: String,
    password: String,
    created_at: i32,
    is_active: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

#[derive(Debug, PartialEq)]
pub enum UserTableError {
    EmailExists,
    PasswordHashError,
    PasswordTooShort,
    DatabaseError,
}

#[derive(Debug)]
pub enum UserQuery<'a> {
    Id(i32),
    Email(&'a str),
}

impl User {
    pub fn create(conn: &mut SqliteConnection, new_user: &NewUser) -> Result<User, UserTableError> {
        if User::exists(conn, &new_user.email) {
            log::warn!("User with email {} already exists", new_user.email);
            return Err(UserTableError::EmailExists);
        }

        let password_hash = Self::hash_password(&new_user.password)?;

        let user = InsertableUser {
            login_email: new_user.email.clone(),
            password: password_hash,
            created_at: chrono::Utc::now().timestamp() as i32,
            is_active: true,
        };

        diesel::insert_into(users::table)
            .values(&user)
            .get_result(conn)
            .map_err(|err| {
                log::error!("Failed to insert user into database: {:?}", err);
                UserTableError::DatabaseError
            })
    }

    pub fn exists(conn: &mut SqliteConnection, email: &str) -> bool {
        use crate::schema::users::dsl::*;
        users
            .filter(login_email.eq(email))
            .first::<User>(conn)
            .is_ok()
    }

    /// `Ok(None)` when no user matches; storage failures stay errors.
    pub fn get(conn: &mut SqliteConnection, query: UserQuery) -> QueryResult<Option<User>> {
        use crate::schema::users::dsl::*;
        log::debug!("Getting user: {:?}", query);
        let found = match query {
            UserQuery::Id(user_id) => users.filter(id.eq(user_id)).first::<User>(conn),
            UserQuery::Email(email) => users.filter(login_email.eq(email)).first::<User>(conn),
        };
        found.optional()
    }

    fn hash_password(password: &str) -> Result<String, UserTableError> {
        if password.is_empty() {
            return Err(UserTableError::PasswordTooShort);
        }
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| UserTableError::PasswordHashError)
    }

    pub fn check_password(user: &User, password: &str) -> Result<bool, UserTableError> {
        let password_hash = PasswordHash::new(&user.password).map_err(|_| {
            log::error!("Failed to parse password hash");
            UserTableError::PasswordHashError
        })?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &password_hash)
            .is_ok())
    }
}
