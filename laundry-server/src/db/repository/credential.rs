//! Credential Repository
//!
//! 单例凭据记录，服务端只读；写入只发生在 seed-credential 工具中。

use super::{BaseRepository, RepoResult};
use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

const TABLE: &str = "credential";

/// Raw credential document as stored (hex-encoded binary fields)
///
/// Fields are optional on read so a half-written record surfaces as a
/// shape error in the verifier instead of a decode failure here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDocument {
    pub derived_key: Option<String>,
    pub salt: Option<String>,
}

#[derive(Clone)]
pub struct CredentialRepository {
    base: BaseRepository,
}

impl CredentialRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find the stored credential, if any
    pub async fn find_one(&self) -> RepoResult<Option<CredentialDocument>> {
        let docs: Vec<CredentialDocument> = self
            .base
            .db()
            .query(format!("SELECT derivedKey, salt FROM {TABLE} LIMIT 1"))
            .await?
            .take(0)?;
        Ok(docs.into_iter().next())
    }

    /// Replace whatever is stored with a single new credential
    pub async fn replace(&self, doc: CredentialDocument) -> RepoResult<()> {
        self.base
            .db()
            .query(format!("DELETE {TABLE}"))
            .query(format!("CREATE {TABLE} CONTENT $data RETURN NONE"))
            .bind(("data", doc))
            .await?
            .check()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::db::DbService;

    async fn repo() -> CredentialRepository {
        let service = DbService::try_connect(&Config::in_memory()).await.unwrap();
        CredentialRepository::new(service.db)
    }

    fn doc(key: &str) -> CredentialDocument {
        CredentialDocument {
            derived_key: Some(key.to_string()),
            salt: Some("00".repeat(16)),
        }
    }

    #[tokio::test]
    async fn test_find_one_empty() {
        let repo = repo().await;
        assert_eq!(repo.find_one().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_keeps_single_record() {
        let repo = repo().await;

        repo.replace(doc("aa")).await.unwrap();
        repo.replace(doc("bb")).await.unwrap();

        let rows: Vec<serde_json::Value> = repo
            .base
            .db()
            .query("SELECT salt FROM credential")
            .await
            .unwrap()
            .take(0)
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(repo.find_one().await.unwrap(), Some(doc("bb")));
    }

    #[tokio::test]
    async fn test_find_one_partial_record() {
        let repo = repo().await;
        repo.base
            .db()
            .query("CREATE credential SET salt = '00'")
            .await
            .unwrap()
            .check()
            .unwrap();

        let found = repo.find_one().await.unwrap().unwrap();
        assert_eq!(found.derived_key, None);
        assert_eq!(found.salt.as_deref(), Some("00"));
    }
}
