use actix_web::{delete, get, web, HttpResponse};

use super::types::{LoginRequest, SessionResponse};
use crate::errors::{AppError, AppResult};
use crate::models::user::{User, UserQuery};
use crate::security::validation;
use crate::session::{session_manager, SessionClaims};
use crate::RqDbPool;

#[get("")]
pub async fn get_session(claims: SessionClaims) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(SessionResponse { user: claims.sub }))
}

#[delete("")]
pub async fn delete_session(pool: RqDbPool, claims: SessionClaims) -> AppResult<HttpResponse> {
    let mut conn = pool.get()?;
    let response = session_manager::clear_session(&mut conn, &claims.session_id)?;
    tracing::info!(user_id = claims.sub, "User logged out");
    Ok(response)
}

pub async fn login(pool: RqDbPool, login_req: web::Json<LoginRequest>) -> AppResult<HttpResponse> {
    if let Err(e) = validation::validate_email(&login_req.email) {
        tracing::warn!(
            email = %login_req.email,
            error = %e,
            "Login attempt with invalid email format"
        );
        return Err(AppError::InvalidCredentials);
    }

    if login_req.password.is_empty() || login_req.password.len() > 128 {
        tracing::warn!(
            email = %login_req.email,
            password_length = login_req.password.len(),
            "Login attempt with invalid password length"
        );
        return Err(AppError::InvalidCredentials);
    }

    let mut conn = pool.get()?;

    let user = User::get(&mut conn, UserQuery::Email(&login_req.email))?.ok_or_else(|| {
        tracing::warn!(email = %login_req.email, "Login attempt for non-existent user");
        AppError::InvalidCredentials
    })?;

    if !user.is_active {
        return Err(AppError::InvalidCredentials);
    }

    let is_password_correct =
        User::check_password(&user, &login_req.password).map_err(|_| AppError::InternalError)?;
    if !is_password_correct {
        return Err(AppError::InvalidCredentials);
    }

    let response = session_manager::create_session(&mut conn, &user)?;
    tracing::info!(user_id = user.id, "User login successful");
    Ok(response)
}
