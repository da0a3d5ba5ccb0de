//! PIN 校验 - PBKDF2-HMAC-SHA256 + 常量时间比较
//!
//! The stored credential is `(derivedKey, salt)`; a submitted value matches
//! when re-deriving it with the same salt yields the same 32 bytes.

use std::num::NonZeroU32;

use ring::{constant_time, pbkdf2};
use thiserror::Error;

use crate::db::repository::CredentialDocument;
use shared::error::AppError;

/// Output length of the key derivation (bytes)
pub const DERIVED_KEY_LEN: usize = 32;

/// Salt length produced by the seeding tool (bytes)
pub const SALT_LEN: usize = 16;

/// Fixed PBKDF2 work factor. Changing it invalidates every stored credential.
pub const PBKDF2_ITERATIONS: NonZeroU32 = match NonZeroU32::new(310_000) {
    Some(n) => n,
    None => panic!("iteration count must be non-zero"),
};

/// Credential errors
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("stored credential is missing field `{0}`")]
    MissingField(&'static str),

    #[error("stored credential field `{field}` is not valid hex: {source}")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("stored derived key is {0} bytes, expected {DERIVED_KEY_LEN}")]
    KeyLength(usize),

    #[error("stored salt is empty")]
    EmptySalt,

    #[error("key derivation task failed: {0}")]
    Derivation(String),
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Derivation(msg) => AppError::internal(msg),
            other => AppError::credential_corrupted(other.to_string()),
        }
    }
}

/// Credential with its shape validated, ready for comparison
#[derive(Clone, PartialEq, Eq)]
pub struct StoredCredential {
    derived_key: [u8; DERIVED_KEY_LEN],
    salt: Vec<u8>,
}

impl StoredCredential {
    pub fn new(derived_key: [u8; DERIVED_KEY_LEN], salt: Vec<u8>) -> Result<Self, CredentialError> {
        if salt.is_empty() {
            return Err(CredentialError::EmptySalt);
        }
        Ok(Self { derived_key, salt })
    }

    /// Derive a fresh credential for `secret` with the given salt
    pub fn derive(secret: &[u8], salt: Vec<u8>) -> Result<Self, CredentialError> {
        let derived_key = derive_key(secret, &salt);
        Self::new(derived_key, salt)
    }

    pub fn derived_key(&self) -> &[u8; DERIVED_KEY_LEN] {
        &self.derived_key
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Storage form (hex-encoded fields)
    pub fn to_document(&self) -> CredentialDocument {
        CredentialDocument {
            derived_key: Some(hex::encode(self.derived_key)),
            salt: Some(hex::encode(&self.salt)),
        }
    }

    /// Check `candidate` on the blocking pool
    ///
    /// 310k PBKDF2 rounds take long enough to stall a runtime worker, so the
    /// derivation runs via `spawn_blocking`.
    pub async fn verify_blocking(&self, candidate: String) -> Result<bool, CredentialError> {
        let credential = self.clone();
        tokio::task::spawn_blocking(move || {
            verify(candidate.as_bytes(), &credential.derived_key, &credential.salt)
        })
        .await
        .map_err(|e| CredentialError::Derivation(e.to_string()))
    }
}

impl TryFrom<CredentialDocument> for StoredCredential {
    type Error = CredentialError;

    fn try_from(doc: CredentialDocument) -> Result<Self, Self::Error> {
        let key_hex = doc
            .derived_key
            .ok_or(CredentialError::MissingField("derivedKey"))?;
        let salt_hex = doc.salt.ok_or(CredentialError::MissingField("salt"))?;

        let key = hex::decode(key_hex).map_err(|source| CredentialError::InvalidHex {
            field: "derivedKey",
            source,
        })?;
        let salt = hex::decode(salt_hex).map_err(|source| CredentialError::InvalidHex {
            field: "salt",
            source,
        })?;

        let derived_key: [u8; DERIVED_KEY_LEN] = key
            .as_slice()
            .try_into()
            .map_err(|_| CredentialError::KeyLength(key.len()))?;

        Self::new(derived_key, salt)
    }
}

// Key material stays out of logs
impl std::fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredential")
            .field("derived_key", &"<redacted>")
            .field("salt_len", &self.salt.len())
            .finish()
    }
}

/// Derive the 32-byte key for `secret` and `salt`
pub fn derive_key(secret: &[u8], salt: &[u8]) -> [u8; DERIVED_KEY_LEN] {
    let mut out = [0u8; DERIVED_KEY_LEN];
    pbkdf2::derive(pbkdf2::PBKDF2_HMAC_SHA256, PBKDF2_ITERATIONS, salt, secret, &mut out);
    out
}

/// Whether `candidate` re-derives to `stored_derived_key` under `salt`
///
/// A stored key of any length other than 32 bytes is a plain mismatch.
pub fn verify(candidate: &[u8], stored_derived_key: &[u8], salt: &[u8]) -> bool {
    let derived = derive_key(candidate, salt);
    constant_time_eq(&derived, stored_derived_key)
}

/// Constant-time byte comparison; unequal lengths compare as not equal
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    constant_time::verify_slices_are_equal(a, b).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_SALT: [u8; SALT_LEN] = [0u8; SALT_LEN];

    #[test]
    fn test_verify_matches_derived_key() {
        let key = derive_key(b"1234", &ZERO_SALT);
        assert!(verify(b"1234", &key, &ZERO_SALT));
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let key = derive_key(b"1234", &ZERO_SALT);
        assert!(!verify(b"0000", &key, &ZERO_SALT));
        assert!(!verify(b"12345", &key, &ZERO_SALT));
        assert!(!verify(b"", &key, &ZERO_SALT));
    }

    #[test]
    fn test_verify_rejects_other_salt() {
        let key = derive_key(b"1234", &ZERO_SALT);
        assert!(!verify(b"1234", &key, &[1u8; SALT_LEN]));
    }

    #[test]
    fn test_derive_key_is_deterministic() {
        assert_eq!(derive_key(b"1234", &ZERO_SALT), derive_key(b"1234", &ZERO_SALT));
        assert_ne!(derive_key(b"1234", &ZERO_SALT), derive_key(b"1235", &ZERO_SALT));
    }

    #[test]
    fn test_verify_wrong_length_key_is_mismatch() {
        let key = derive_key(b"1234", &ZERO_SALT);
        assert!(!verify(b"1234", &key[..31], &ZERO_SALT));
        assert!(!verify(b"1234", &[], &ZERO_SALT));

        let mut longer = key.to_vec();
        longer.push(0);
        assert!(!verify(b"1234", &longer, &ZERO_SALT));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
        assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
        assert!(!constant_time_eq(&[9, 2, 3], &[1, 2, 3]));
        assert!(!constant_time_eq(&[1, 2, 3], &[1, 2]));
        assert!(constant_time_eq(&[], &[]));
    }

    #[test]
    fn test_document_round_trip() {
        let credential = StoredCredential::derive(b"1234", ZERO_SALT.to_vec()).unwrap();
        let doc = credential.to_document();
        assert_eq!(doc.salt.as_deref(), Some("00000000000000000000000000000000"));

        let parsed = StoredCredential::try_from(doc).unwrap();
        assert_eq!(parsed, credential);
    }

    #[test]
    fn test_document_missing_field() {
        let doc = CredentialDocument {
            derived_key: None,
            salt: Some("00".into()),
        };
        assert!(matches!(
            StoredCredential::try_from(doc),
            Err(CredentialError::MissingField("derivedKey"))
        ));
    }

    #[test]
    fn test_document_bad_hex() {
        let doc = CredentialDocument {
            derived_key: Some("zz".repeat(32)),
            salt: Some("00".into()),
        };
        assert!(matches!(
            StoredCredential::try_from(doc),
            Err(CredentialError::InvalidHex { field: "derivedKey", .. })
        ));
    }

    #[test]
    fn test_document_short_key() {
        let doc = CredentialDocument {
            derived_key: Some("ab".repeat(31)),
            salt: Some("00".into()),
        };
        assert!(matches!(
            StoredCredential::try_from(doc),
            Err(CredentialError::KeyLength(31))
        ));
    }

    #[test]
    fn test_document_empty_salt() {
        let doc = CredentialDocument {
            derived_key: Some("ab".repeat(32)),
            salt: Some(String::new()),
        };
        assert!(matches!(
            StoredCredential::try_from(doc),
            Err(CredentialError::EmptySalt)
        ));
    }

    #[test]
    fn test_corruption_maps_to_generic_internal_error() {
        let err: AppError = CredentialError::KeyLength(31).into();
        assert!(err.is_system());
        assert_eq!(err.code, shared::ErrorCode::CredentialCorrupted);

        let err: AppError = CredentialError::Derivation("panicked".into()).into();
        assert_eq!(err.code, shared::ErrorCode::InternalError);
    }

    #[test]
    fn test_debug_redacts_key() {
        let credential = StoredCredential::derive(b"1234", ZERO_SALT.to_vec()).unwrap();
        let printed = format!("{:?}", credential);
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains(&hex::encode(credential.derived_key())));
    }

    #[tokio::test]
    async fn test_verify_blocking() {
        let credential = StoredCredential::derive(b"1234", ZERO_SALT.to_vec()).unwrap();
        assert!(credential.verify_blocking("1234".into()).await.unwrap());
        assert!(!credential.verify_blocking("0000".into()).await.unwrap());
    }
}
