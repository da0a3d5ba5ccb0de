//! Order Repository

use super::{BaseRepository, RepoError, RepoResult};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;
use shared::models::{Order, OrderStatus};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use uuid::Uuid;

const TABLE: &str = "orders";

/// Projection returning the pure record key as `id`
const ORDER_FIELDS: &str =
    "record::id(id) AS id, date, clothesCount, sareeCount, status, createdAt, updatedAt";

/// Validated order ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub date: NaiveDate,
    pub clothes_count: u32,
    pub saree_count: u32,
    pub status: OrderStatus,
}

/// Stored document body (the record id lives outside the content)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderContent {
    date: NaiveDate,
    clothes_count: u32,
    saree_count: u32,
    status: OrderStatus,
    created_at: String,
    updated_at: String,
}

/// Fixed-width RFC 3339 so `ORDER BY createdAt` sorts chronologically
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orders, oldest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(format!(
                "SELECT {ORDER_FIELDS} FROM {TABLE} ORDER BY createdAt ASC"
            ))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(format!(
                "SELECT {ORDER_FIELDS} FROM type::thing($table, $id)"
            ))
            .bind(("table", TABLE))
            .bind(("id", id.to_string()))
            .await?
            .take(0)?;
        Ok(orders.into_iter().next())
    }

    /// Create a new order with a generated id and fresh timestamps
    pub async fn create(&self, data: NewOrder) -> RepoResult<Order> {
        let id = Uuid::new_v4().simple().to_string();
        let now = timestamp(Utc::now());
        let content = OrderContent {
            date: data.date,
            clothes_count: data.clothes_count,
            saree_count: data.saree_count,
            status: data.status,
            created_at: now.clone(),
            updated_at: now,
        };

        let mut result = self
            .base
            .db()
            .query("CREATE type::thing($table, $id) CONTENT $data RETURN NONE")
            .query(format!(
                "SELECT {ORDER_FIELDS} FROM type::thing($table, $id)"
            ))
            .bind(("table", TABLE))
            .bind(("id", id))
            .bind(("data", content))
            .await?
            .check()?;

        let created: Vec<Order> = result.take(1)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Update only the status (and `updatedAt`) of an existing order
    ///
    /// Never creates a record: an unknown id yields [`RepoError::NotFound`].
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query(
                "IF record::exists(type::thing($table, $id)) { \
                     UPDATE type::thing($table, $id) SET status = $status, updatedAt = $now RETURN NONE; \
                 };",
            )
            .query(format!(
                "SELECT {ORDER_FIELDS} FROM type::thing($table, $id)"
            ))
            .bind(("table", TABLE))
            .bind(("id", id.to_string()))
            .bind(("status", status))
            .bind(("now", timestamp(Utc::now())))
            .await?
            .check()?;

        let updated: Vec<Order> = result.take(1)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }
}
