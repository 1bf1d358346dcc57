//! Cache-defeating asset tokens.

/// Monotonic invalidation token for image URLs.
///
/// Regenerated images are written back to stable URLs, so consumers that
/// cache by URL would keep showing the old render. The cache holds one
/// `u64` token per story view session, bumped exactly once on each
/// successful image-generation completion or manual refresh, and decorates
/// URLs with it as a query parameter. The token is never persisted.
///
/// # Examples
///
/// ```
/// use fresco_workflow::AssetCache;
///
/// let mut cache = AssetCache::default();
/// let before = cache.decorate("/assets/scene-1.png");
/// cache.bump();
/// let after = cache.decorate("/assets/scene-1.png");
/// assert_ne!(before, after);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssetCache {
    token: u64,
}

impl AssetCache {
    /// The current token value.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Advance the token, invalidating previously decorated URLs.
    pub fn bump(&mut self) {
        self.token += 1;
        tracing::debug!(token = self.token, "Asset token bumped");
    }

    /// Append the token to a URL as a cache-defeating query parameter.
    pub fn decorate(&self, url: &str) -> String {
        if url.contains('?') {
            format!("{}&v={}", url, self.token)
        } else {
            format!("{}?v={}", url, self.token)
        }
    }
}
