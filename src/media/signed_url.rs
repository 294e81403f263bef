//! # Signed URL Generation
//!
//! Read URLs for stored images: SHA-256 signature over path and expiry,
//! base64url token.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};

use super::errors::{MediaError, MediaResult};

/// Signed URL generator
#[derive(Debug)]
pub struct SignedUrlGenerator {
    secret: Vec<u8>,
    base_url: String,
    default_expiry: Duration,
}

impl SignedUrlGenerator {
    pub fn new(secret: &[u8], base_url: impl Into<String>) -> Self {
        Self {
            secret: secret.to_vec(),
            base_url: base_url.into(),
            default_expiry: Duration::days(365),
        }
    }

    /// Generate a read URL for a stored path
    pub fn generate(&self, path: &str, expires_at: Option<DateTime<Utc>>) -> String {
        let expires = expires_at.unwrap_or_else(|| Utc::now() + self.default_expiry);
        let expires_ts = expires.timestamp();
        let signature = self.sign(path, expires_ts);

        format!(
            "{}/v1/media/{}?token={}&expires={}",
            self.base_url, path, signature, expires_ts
        )
    }

    /// Verify a token for a path/expiry pair
    pub fn verify(&self, path: &str, token: &str, expires_ts: i64) -> MediaResult<()> {
        if Utc::now().timestamp() > expires_ts {
            return Err(MediaError::InvalidPath(format!("URL expired for {}", path)));
        }
        if self.sign(path, expires_ts) != token {
            return Err(MediaError::InvalidPath(format!(
                "Bad signature for {}",
                path
            )));
        }
        Ok(())
    }

    fn sign(&self, path: &str, expires_ts: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.secret);
        hasher.update(path.as_bytes());
        hasher.update(expires_ts.to_be_bytes());
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }
}
