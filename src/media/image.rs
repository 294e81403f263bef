//! # Image Service
//!
//! Upload and replacement of product images. Every stored image is
//! identified by its canonical blob path, which travels with the product
//! record; deletion takes that path directly, never a parsed-apart URL.

use chrono::Utc;
use serde::Serialize;

use super::backend::BlobBackend;
use super::errors::{MediaError, MediaResult};
use super::signed_url::SignedUrlGenerator;

/// Folder prefix for product images
const IMAGE_PREFIX: &str = "stall-craft";

/// A stored image: the canonical path plus a read URL
#[derive(Debug, Clone, Serialize)]
pub struct StoredImage {
    pub path: String,
    pub url: String,
}

/// Image upload and replacement over a blob backend
pub struct ImageService<B: BlobBackend> {
    backend: B,
    urls: SignedUrlGenerator,
}

impl<B: BlobBackend> ImageService<B> {
    pub fn new(backend: B, urls: SignedUrlGenerator) -> Self {
        Self { backend, urls }
    }

    /// Store image bytes under a fresh timestamped path
    pub fn upload(&self, file_name: &str, data: &[u8]) -> MediaResult<StoredImage> {
        if data.is_empty() {
            return Err(MediaError::EmptyUpload);
        }

        let path = format!(
            "{}/{}_{}",
            IMAGE_PREFIX,
            Utc::now().timestamp_millis(),
            sanitize_file_name(file_name)
        );
        self.backend.write(&path, data)?;

        let url = self.urls.generate(&path, None);
        Ok(StoredImage { path, url })
    }

    /// Replace an image: delete the old blob by its canonical path, then
    /// upload the new bytes. A missing old blob is tolerated.
    pub fn replace(
        &self,
        old_path: Option<&str>,
        file_name: &str,
        data: &[u8],
    ) -> MediaResult<StoredImage> {
        if let Some(path) = old_path {
            match self.backend.delete(path) {
                Ok(()) | Err(MediaError::NotFound(_)) => {}
                Err(err) => return Err(err),
            }
        }

        self.upload(file_name, data)
    }

    /// Verify a read token for a path and return the blob bytes
    pub fn read_verified(&self, path: &str, token: &str, expires_ts: i64) -> MediaResult<Vec<u8>> {
        self.urls.verify(path, token, expires_ts)?;
        self.backend.read(path)
    }

    /// Delete an image by canonical path
    pub fn delete(&self, path: &str) -> MediaResult<()> {
        self.backend.delete(path)
    }
}

/// Keep file names to a safe character set
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    // A leading dot run would read as a traversal segment in the path
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned.to_string()
    }
}
