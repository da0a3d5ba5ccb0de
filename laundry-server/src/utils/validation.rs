//! Input validation helpers
//!
//! Everything here runs before the store is touched, so a rejected
//! payload never leaves a partial write behind.

use chrono::{DateTime, NaiveDate};

use crate::db::repository::NewOrder;
use crate::utils::AppError;
use shared::error::ErrorCode;
use shared::models::{OrderCreate, OrderStatus};

/// Accepted order date formats, besides a full RFC 3339 timestamp
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a count field: integer in `0..=u32::MAX`
pub fn validate_count(value: i64, field: &str) -> Result<u32, AppError> {
    if value < 0 {
        return Err(AppError::out_of_range(
            field,
            format!("{field} must be greater than or equal to 0"),
        ));
    }
    u32::try_from(value)
        .map_err(|_| AppError::out_of_range(field, format!("{field} is too large ({value})")))
}

/// Parse an order status, rejecting anything outside the enumeration
pub fn validate_status(value: &str) -> Result<OrderStatus, AppError> {
    value
        .parse::<OrderStatus>()
        .map_err(|_| AppError::invalid_status(value))
}

/// Parse a calendar date
///
/// `YYYY-MM-DD` is the canonical form; an RFC 3339 timestamp is accepted
/// too and reduced to its calendar date.
pub fn validate_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| {
            AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("{field} must be a date in YYYY-MM-DD format"),
            )
            .with_detail("field", field)
        })
}

/// Validate a create-order payload into a writable order
pub fn validate_order_create(payload: &OrderCreate) -> Result<NewOrder, AppError> {
    Ok(NewOrder {
        date: validate_date(&payload.date, "date")?,
        clothes_count: validate_count(payload.clothes_count, "clothesCount")?,
        saree_count: validate_count(payload.saree_count, "sareeCount")?,
        status: validate_status(&payload.status)?,
    })
}
