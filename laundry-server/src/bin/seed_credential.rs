//! Seed the stored credential
//!
//! Usage:
//!
//! ```text
//! seed-credential <secret>
//! SEED_SECRET=<secret> seed-credential
//! ```
//!
//! Connects with the same environment as the server (`DATABASE_URL`,
//! `DB_NAMESPACE`, `DB_NAME`, ...), derives a key from the secret with a fresh
//! random salt, and replaces whatever credential is stored.

use anyhow::{Context, bail};
use rand::RngCore;
use rand::rngs::OsRng;

use laundry_server::auth::SALT_LEN;
use laundry_server::db::repository::CredentialRepository;
use laundry_server::{Config, DbService, StoredCredential, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = init_logger();

    let secret = match std::env::args().nth(1) {
        Some(s) => s,
        None => std::env::var("SEED_SECRET")
            .context("usage: seed-credential <secret> (or set SEED_SECRET)")?,
    };
    if secret.is_empty() {
        bail!("secret must not be empty");
    }

    let config = Config::from_env();
    if config.is_ephemeral_store() {
        tracing::warn!(
            database = %config.database_url,
            "Seeding an in-memory store; the credential is gone when this process exits"
        );
    }

    let mut salt = vec![0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let credential = StoredCredential::derive(secret.as_bytes(), salt)
        .context("failed to derive credential")?;

    let db = DbService::try_connect(&config)
        .await
        .context("failed to connect to database")?;
    CredentialRepository::new(db.db)
        .replace(credential.to_document())
        .await
        .context("failed to store credential")?;

    tracing::info!(database = %config.database_url, "Credential stored");
    Ok(())
}
