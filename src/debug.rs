// src/debug.rs
//! Dev-only diagnostics. Raw feedback text is never logged; events carry a
//! short SHA-256 prefix of the text instead.

use sha2::{Digest, Sha256};
use std::fmt::Write as _;

pub const ENV_DEV_LOG: &str = "FEEDBACK_DEV_LOG";
pub const ENV_APP_ENV: &str = "APP_ENV";

/// Debug build, or `APP_ENV` in {local, development, dev}.
pub fn is_dev_env() -> bool {
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var(ENV_APP_ENV)
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// `FEEDBACK_DEV_LOG=1` AND dev environment.
pub fn dev_logging_enabled() -> bool {
    let on = std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
    on && is_dev_env()
}

/// First 6 bytes of SHA-256 as hex (12 chars).
pub fn anon_hash(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_short_and_stable() {
        let a = anon_hash("o produto chegou quebrado");
        assert_eq!(a.len(), 12);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(a, anon_hash("o produto chegou quebrado"));
        assert_ne!(a, anon_hash("o produto chegou inteiro"));
        // sha256("") = e3b0c442 98fc...
        assert_eq!(anon_hash(""), "e3b0c44298fc");
    }
}
