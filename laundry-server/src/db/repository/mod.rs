//! Repository Module
//!
//! Provides the store operations for the SurrealDB tables.

// Auth
pub mod credential;

// Orders
pub mod order;

// Re-exports
pub use credential::{CredentialDocument, CredentialRepository};
pub use order::{NewOrder, OrderRepository};

use shared::error::AppError;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: API 只暴露纯 key
// =============================================================================
//
// 记录 ID 在库内是 "orders:<key>"，对外只返回 <key>：
//   - 查询: SELECT record::id(id) AS id, ... (见 order::ORDER_FIELDS)
//   - 定位: type::thing($table, $id)，$id 始终通过 bind 传入
//
// 禁止把外部传入的 id 拼接进 SurrealQL 字符串

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}
