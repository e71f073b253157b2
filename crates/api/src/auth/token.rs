//! Opaque CMS session tokens.
//!
//! The plaintext token is handed to the client once at sign-in; only an
//! HMAC-SHA256 digest keyed by the server's `SECRET_KEY` is stored, so
//! a leaked database cannot be replayed against the API.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Generate a fresh opaque session token.
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}

/// Compute the HMAC-SHA256 hex digest of a session token.
///
/// Use this to compare an incoming token against the stored digest.
pub fn hash_session_token(token: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    format!("{:x}", mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_for_the_same_token_and_secret() {
        let token = generate_session_token();
        let first = hash_session_token(&token, "secret");
        let second = hash_session_token(&token, "secret");
        assert_eq!(first, second);

        // Sanity: the digest should be a 64-char hex string (SHA-256).
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn different_secrets_produce_different_digests() {
        let token = generate_session_token();
        let alpha = hash_session_token(&token, "secret-alpha");
        let bravo = hash_session_token(&token, "secret-bravo");
        assert_ne!(alpha, bravo);
    }

    #[test]
    fn different_tokens_produce_different_digests() {
        let first = hash_session_token(&generate_session_token(), "secret");
        let second = hash_session_token(&generate_session_token(), "secret");
        assert_ne!(first, second);
    }
}
