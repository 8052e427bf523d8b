use std::future::{ready, Ready};

use crate::errors::ErrorBody;
use crate::models::{
    session::Session,
    user::{User, UserQuery},
};
use crate::RqDbPool;
use actix_web::{
    dev::Payload, error::ResponseError, http::StatusCode, FromRequest, HttpRequest, HttpResponse,
};
use derive_more::Display;

pub const SESSION_COOKIE: &str = "session_id";

#[derive(Debug, Display)]
pub enum SessionError {
    #[display(fmt = "no_session_cookie")]
    NoSessionCookie,
    #[display(fmt = "invalid_session")]
    InvalidSession,
    #[display(fmt = "database_error")]
    DatabaseError,
}

impl ResponseError for SessionError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            Self::NoSessionCookie | Self::InvalidSession => "Valid session required",
            Self::DatabaseError => "A database error occurred",
        };
        HttpResponse::build(status).json(ErrorBody {
            error: status.as_u16(),
            message: message.to_string(),
        })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NoSessionCookie | Self::InvalidSession => StatusCode::UNAUTHORIZED,
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Identity of the caller, resolved once per request from the session cookie
/// and handed explicitly to every service call.
#[derive(Clone, Debug)]
pub struct SessionClaims {
    /// user id
    pub sub: i32,
    pub session_id: String,
}

impl FromRequest for SessionClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve_session(req).map_err(Into::into))
    }
}

fn resolve_session(req: &HttpRequest) -> Result<SessionClaims, SessionError> {
    let pool = req.app_data::<RqDbPool>().ok_or_else(|| {
        log::error!("Failed to get database pool from app data");
        SessionError::DatabaseError
    })?;

    let session_id = extract_session_cookie(req).ok_or_else(|| {
        log::debug!("No session cookie found");
        SessionError::NoSessionCookie
    })?;

    let mut conn = pool.get().map_err(|_| SessionError::DatabaseError)?;

    let session = Session::get_valid(&mut conn, &session_id)
        .map_err(|_| SessionError::DatabaseError)?
        .ok_or_else(|| {
            log::debug!("Invalid or expired session");
            SessionError::InvalidSession
        })?;

    let user = User::get(&mut conn, UserQuery::Id(session.user_id))
        .map_err(|e| {
            log::error!("Failed to load session user: {}", e);
            SessionError::DatabaseError
        })?
        .ok_or(SessionError::InvalidSession)?;
    if !user.is_active {
        return Err(SessionError::InvalidSession);
    }

    if session.touch(&mut conn).is_err() {
        log::warn!("Failed to update session last_accessed time");
    }

    Ok(SessionClaims {
        sub: user.id,
        session_id,
    })
}

fn extract_session_cookie(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// Session management functions
pub mod session_manager {
    use super::*;
    use actix_web::cookie::{time::OffsetDateTime, Cookie, SameSite};
    use diesel::{result::Error as DieselError, SqliteConnection};
    use serde_json::json;

    fn session_cookie(value: &str, expires: OffsetDateTime) -> Cookie<'_> {
        // Use secure cookies in production, but not in development (localhost)
        Cookie::build(SESSION_COOKIE, value)
            .secure(!cfg!(debug_assertions))
            .http_only(true)
            .same_site(SameSite::Strict)
            .expires(expires)
            .path("/")
            .finish()
    }

    /// Create a new session and set the session cookie
    pub fn create_session(
        conn: &mut SqliteConnection,
        user: &User,
    ) -> Result<HttpResponse, DieselError> {
        let session = Session::create(conn, user.id)?;
        let expires = OffsetDateTime::from_unix_timestamp(session.expires_at as i64)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH);

        Ok(HttpResponse::Ok()
            .cookie(session_cookie(&session.session_id, expires))
            .json(json!({ "user": user.id })))
    }

    /// Clear session and remove session cookie
    pub fn clear_session(
        conn: &mut SqliteConnection,
        session_id: &str,
    ) -> Result<HttpResponse, DieselError> {
        Session::delete(conn, session_id)?;

        Ok(HttpResponse::Ok()
            .cookie(session_cookie("", OffsetDateTime::UNIX_EPOCH))
            .json(json!({})))
    }
}
