//! Order Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order lifecycle status
///
/// Given → the batch was handed over, Received → it came back,
/// Paid → it has been settled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Given,
    Received,
    Paid,
}

impl OrderStatus {
    /// Every accepted status, in lifecycle order
    pub const ALL: [OrderStatus; 3] = [Self::Given, Self::Received, Self::Paid];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::Received => "Received",
            Self::Paid => "Paid",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the enumerated statuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrderStatus(pub String);

impl fmt::Display for UnknownOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status: {}", self.0)
    }
}

impl std::error::Error for UnknownOrderStatus {}

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    /// Exact, case-sensitive match against the stored spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownOrderStatus(s.to_string()))
    }
}

/// Order entity as stored in the `orders` table and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Record key (without table prefix)
    pub id: String,
    pub date: NaiveDate,
    pub clothes_count: u32,
    pub saree_count: u32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create order payload (POST /add-order)
///
/// Fields are kept loose (string date, signed counts, string status) so the
/// server can report precise validation errors instead of a generic parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub date: String,
    pub clothes_count: i64,
    pub saree_count: i64,
    pub status: String,
}

/// Update status payload (PUT /update-order/{id})
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}
