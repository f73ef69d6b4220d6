use crate::error::{LoadError, LoadResult};
use std::path::{Path, PathBuf};

/// Persistent cache for lounge images.
/// Stores downloaded images as files in the cache directory, keyed by URL.
#[derive(Debug, Clone)]
pub struct ImageCache {
    cache_dir: PathBuf,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCache {
    /// Create a cache in the platform cache directory
    pub fn new() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lounge_search")
            .join("images");
        Self::with_dir(cache_dir)
    }

    /// Create a cache rooted at `cache_dir`
    pub fn with_dir(cache_dir: impl Into<PathBuf>) -> Self {
        let cache_dir = cache_dir.into();
        if let Err(e) = std::fs::create_dir_all(&cache_dir) {
            log::warn!("Failed to create image cache directory: {}", e);
        }

        log::info!("Image cache directory: {:?}", cache_dir);
        Self { cache_dir }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Filename for a URL, derived from its host, path and query so it stays
    /// the same across builds. The path's extension, if any, is kept.
    fn filename(url: &str) -> String {
        let url = url.split('#').next().unwrap_or(url);
        let url = url.split_once("://").map_or(url, |(_, rest)| rest);
        let (path, query) = url.split_once('?').unwrap_or((url, ""));

        let extension = path
            .rsplit('/')
            .next()
            .and_then(|file| file.rsplit_once('.'))
            .map(|(_, ext)| ext.to_lowercase())
            .filter(|ext| {
                !ext.is_empty() && ext.len() <= 4 && ext.chars().all(|c| c.is_ascii_alphanumeric())
            });

        let stem = match &extension {
            Some(ext) => &path[..path.len() - ext.len() - 1],
            None => path,
        };

        let mut name = sanitize(stem.trim_end_matches('/'));
        if !query.is_empty() {
            name.push('_');
            name.push_str(&sanitize(query));
        }
        if let Some(ext) = extension {
            name.push('.');
            name.push_str(&ext);
        }
        name
    }

    fn path(&self, url: &str) -> PathBuf {
        self.cache_dir.join(Self::filename(url))
    }

    pub fn contains(&self, url: &str) -> bool {
        self.path(url).exists()
    }

    /// Get a cached image
    pub fn get(&self, url: &str) -> Option<Vec<u8>> {
        match std::fs::read(self.path(url)) {
            Ok(bytes) => {
                log::debug!("Image cache hit for {}", url);
                Some(bytes)
            }
            Err(_) => None,
        }
    }

    /// Store an image in the cache
    pub fn insert(&self, url: &str, bytes: &[u8]) {
        if let Err(e) = std::fs::write(self.path(url), bytes) {
            log::warn!("Failed to cache image: {}", e);
        } else {
            log::debug!("Cached image for {}", url);
        }
    }
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Download image bytes
pub async fn fetch_image_async(client: &reqwest::Client, url: &str) -> LoadResult<Vec<u8>> {
    log::debug!("Fetching image: {}", url);

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(LoadError::HttpStatus(response.status()));
    }
    Ok(response.bytes().await?.to_vec())
}

/// Fetch an image, checking the disk cache first
pub async fn fetch_image_cached(
    cache: &ImageCache,
    client: &reqwest::Client,
    url: &str,
) -> LoadResult<Vec<u8>> {
    if let Some(bytes) = cache.get(url) {
        return Ok(bytes);
    }

    log::info!("Image cache miss for {}, downloading", url);
    let bytes = fetch_image_async(client, url).await?;
    cache.insert(url, &bytes);

    Ok(bytes)
}
