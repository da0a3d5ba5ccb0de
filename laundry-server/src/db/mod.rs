//! Database Module
//!
//! Handles the SurrealDB connection and the table definitions the repositories rely on.

pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;

use crate::core::Config;
use repository::{RepoError, RepoResult};

/// Field assertions mirror the API validation so the store never holds
/// an unknown status or a negative count, whoever writes to it.
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;
DEFINE FIELD IF NOT EXISTS status ON TABLE orders TYPE string
    ASSERT $value INSIDE ["Given", "Received", "Paid"];
DEFINE FIELD IF NOT EXISTS clothesCount ON TABLE orders TYPE int ASSERT $value >= 0;
DEFINE FIELD IF NOT EXISTS sareeCount ON TABLE orders TYPE int ASSERT $value >= 0;
DEFINE TABLE IF NOT EXISTS credential SCHEMALESS;
"#;

/// Database service, owns the SurrealDB client handle
///
/// The handle is cheap to clone; all clones share one connection.
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect to the configured store without failing the caller
    ///
    /// A connection failure is logged and the service keeps an unconnected
    /// handle: every later query fails with a database error instead of the
    /// process exiting at startup.
    pub async fn connect(config: &Config) -> Self {
        let db = Surreal::<Any>::init();

        match establish(&db, config).await {
            Ok(()) => tracing::info!(
                url = %config.database_url,
                namespace = %config.db_namespace,
                database = %config.db_name,
                "Database connection established"
            ),
            Err(e) => tracing::error!(
                url = %config.database_url,
                error = %e,
                "Database connection failed, requests touching the store will fail"
            ),
        }

        if config.is_ephemeral_store() {
            tracing::warn!("Using in-memory store, data is lost on restart");
        }

        Self { db }
    }

    /// Connect to the configured store, returning the failure to the caller
    pub async fn try_connect(config: &Config) -> RepoResult<Self> {
        let db = Surreal::<Any>::init();
        establish(&db, config).await?;
        Ok(Self { db })
    }

    /// Whether the store currently answers
    pub async fn is_healthy(&self) -> bool {
        self.db.health().await.is_ok()
    }
}

async fn establish(db: &Surreal<Any>, config: &Config) -> Result<(), RepoError> {
    db.connect(config.database_url.as_str()).await?;

    if let (Some(username), Some(password)) = (&config.db_user, &config.db_pass) {
        db.signin(Root {
            username: username.as_str(),
            password: password.as_str(),
        })
        .await?;
    }

    db.use_ns(config.db_namespace.as_str())
        .use_db(config.db_name.as_str())
        .await?;

    db.query(SCHEMA).await?.check()?;
    tracing::debug!("Database schema applied");

    Ok(())
}
