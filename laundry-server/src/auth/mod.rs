//! 认证模块 - 单一凭据校验
//!
//! 没有账号、会话或令牌：只有一条预置的凭据记录，
//! `/check` 用它校验提交的 PIN。

pub mod credential;

pub use credential::{
    CredentialError, DERIVED_KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN, StoredCredential,
    constant_time_eq, derive_key, verify,
};
