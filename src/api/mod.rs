pub mod content;
pub mod entries;
pub mod health;
pub mod routes;
pub mod session;
pub mod subscriptions;
pub mod unread;

use crate::errors::{AppError, AppResult};
use std::num::IntErrorKind;

/// Parses an integer id taken from the request path or query.
pub fn parse_id(field: &str, raw: &str) -> AppResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::invalid_input(field, "Expected an integer"))
}

/// Parses an integer query parameter, saturating values outside `i64`
/// instead of rejecting them. Only non-numeric input is an error.
pub fn parse_saturating(field: &str, raw: &str) -> AppResult<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(AppError::invalid_input(field, "Expected an integer")),
        },
    }
}
