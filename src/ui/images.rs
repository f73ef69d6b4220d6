//! Background loading of lounge images into egui textures.

use crate::error::LoadResult;
use crate::image_cache::{fetch_image_cached, ImageCache};
use eframe::egui;
use log::{debug, error, warn};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::Semaphore;

/// Max concurrent image downloads
const MAX_CONCURRENT_DOWNLOADS: usize = 4;

/// Message sent from background image loader tasks
pub struct LoadedImage {
    pub url: String,
    pub result: LoadResult<Vec<u8>>,
}

pub enum ImageSlot<'a> {
    Ready(&'a egui::TextureHandle),
    Loading,
    Unavailable,
}

pub struct ImageLoader {
    enabled: bool,
    textures: HashMap<String, egui::TextureHandle>,
    loading: HashSet<String>,
    failed: HashSet<String>,
    cache: ImageCache,
    client: reqwest::Client,
    runtime: Handle,
    sender: UnboundedSender<LoadedImage>,
    receiver: UnboundedReceiver<LoadedImage>,
    request_semaphore: Arc<Semaphore>,
}

impl ImageLoader {
    pub fn new(runtime: Handle, cache: ImageCache, enabled: bool) -> Self {
        let (sender, receiver) = unbounded_channel();
        let client = reqwest::Client::builder()
            .user_agent("lounge_search/1.0")
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to configure HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self {
            enabled,
            textures: HashMap::new(),
            loading: HashSet::new(),
            failed: HashSet::new(),
            cache,
            client,
            runtime,
            sender,
            receiver,
            request_semaphore: Arc::new(Semaphore::new(MAX_CONCURRENT_DOWNLOADS)),
        }
    }

    /// Texture for `url`, starting a download on first request
    pub fn slot(&mut self, ctx: &egui::Context, url: &str) -> ImageSlot<'_> {
        if !self.enabled || self.failed.contains(url) {
            return ImageSlot::Unavailable;
        }
        if !self.textures.contains_key(url) && !self.loading.contains(url) {
            self.request(ctx, url);
        }
        match self.textures.get(url) {
            Some(texture) => ImageSlot::Ready(texture),
            None if self.loading.contains(url) => ImageSlot::Loading,
            None => ImageSlot::Unavailable,
        }
    }

    /// Poll the channel for finished downloads and create textures (non-blocking)
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok(loaded) = self.receiver.try_recv() {
            self.loading.remove(&loaded.url);
            match loaded.result {
                Ok(bytes) => self.store_texture(ctx, &loaded.url, &bytes),
                Err(e) => {
                    warn!("Failed to load image {}: {}", loaded.url, e);
                    self.failed.insert(loaded.url);
                }
            }
        }

        if !self.loading.is_empty() {
            ctx.request_repaint();
        }
    }

    fn request(&mut self, ctx: &egui::Context, url: &str) {
        self.loading.insert(url.to_string());

        // Disk cache is fast, keep it synchronous
        if let Some(bytes) = self.cache.get(url) {
            self.loading.remove(url);
            self.store_texture(ctx, url, &bytes);
            return;
        }

        debug!("Spawning image download for {}", url);
        let sender = self.sender.clone();
        let cache = self.cache.clone();
        let client = self.client.clone();
        let semaphore = self.request_semaphore.clone();
        let ctx = ctx.clone();
        let url = url.to_string();

        self.runtime.spawn(async move {
            let result = match semaphore.acquire().await {
                Ok(_permit) => fetch_image_cached(&cache, &client, &url).await,
                Err(e) => Err(crate::error::LoadError::Image(e.to_string())),
            };
            if sender.send(LoadedImage { url, result }).is_err() {
                debug!("Image loader dropped before download finished");
            }
            ctx.request_repaint();
        });
    }

    fn store_texture(&mut self, ctx: &egui::Context, url: &str, bytes: &[u8]) {
        match image::load_from_memory(bytes) {
            Ok(image) => {
                let rgba = image.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let pixels = rgba.into_raw();
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);

                let texture = ctx.load_texture(
                    format!("lounge_{}", url),
                    color_image,
                    egui::TextureOptions::LINEAR,
                );
                self.textures.insert(url.to_string(), texture);
            }
            Err(e) => {
                error!("Failed to decode image {}: {}", url, e);
                self.failed.insert(url.to_string());
            }
        }
    }
}
