//! Credential check payloads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credential check request (POST /check)
#[derive(Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    pub value: String,
}

// Hand-written so the submitted secret never reaches a log line
impl fmt::Debug for CheckRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckRequest")
            .field("value", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_value() {
        let req = CheckRequest {
            value: "1234".to_string(),
        };
        let printed = format!("{:?}", req);
        assert!(!printed.contains("1234"));
        assert!(printed.contains("<redacted>"));
    }
}
