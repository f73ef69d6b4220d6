use eframe::{self, egui};
use egui::ViewportBuilder;
use log::{debug, error};
use tokio::runtime::Runtime;
use tokio::sync::oneshot::{self, error::TryRecvError};

use super::{images::ImageLoader, screens::LoungeSearchScreen};
use crate::error::{LoadError, LoadResult};
use crate::image_cache::ImageCache;
use crate::models::Lounge;
use crate::source::{fetch_lounges_async, DataSource};
use crate::state::SearchState;

type LoadReceiver = oneshot::Receiver<LoadResult<Vec<Lounge>>>;

/// Startup settings for the GUI
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: DataSource,
    pub image_cache: ImageCache,
    pub load_images: bool,
}

pub struct LoungeSearchApp {
    search_state: SearchState,
    images: ImageLoader,
    load_receiver: Option<LoadReceiver>,
    // Owns the worker threads for the data load and image downloads
    _runtime: Runtime,
}

impl LoungeSearchApp {
    /// Build the app and start the one-shot data load in the background
    pub fn new(ctx: &egui::Context, config: AppConfig) -> std::io::Result<Self> {
        let runtime = Runtime::new()?;
        let (sender, receiver) = oneshot::channel();

        let source = config.source;
        let repaint_ctx = ctx.clone();
        runtime.spawn(async move {
            let result = fetch_lounges_async(&source).await;
            if sender.send(result).is_err() {
                debug!("App closed before lounge data finished loading");
            }
            repaint_ctx.request_repaint();
        });

        let images = ImageLoader::new(
            runtime.handle().clone(),
            config.image_cache,
            config.load_images,
        );

        Ok(Self {
            search_state: SearchState::default(),
            images,
            load_receiver: Some(receiver),
            _runtime: runtime,
        })
    }

    /// Hand the finished load to the search state (non-blocking)
    fn poll_load(&mut self) {
        poll_load_receiver(&mut self.load_receiver, &mut self.search_state);
    }
}

/// Move a finished load into `state`. The receiver is dropped once it has
/// produced a result or its sender is gone.
fn poll_load_receiver(receiver: &mut Option<LoadReceiver>, state: &mut SearchState) {
    let Some(rx) = receiver.as_mut() else {
        return;
    };
    match rx.try_recv() {
        Ok(result) => {
            state.apply_load(result);
            *receiver = None;
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Closed) => {
            error!("Lounge data loader stopped without a result");
            state.apply_load(Err(LoadError::Io(std::io::Error::other(
                "loader task ended unexpectedly",
            ))));
            *receiver = None;
        }
    }
}

impl eframe::App for LoungeSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        self.images.poll(ctx);

        LoungeSearchScreen::show(ctx, &mut self.search_state, &mut self.images);
    }
}

pub fn launch_gui(config: AppConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Lounge Search",
        options,
        Box::new(move |cc| {
            let app = LoungeSearchApp::new(&cc.egui_ctx, config)?;
            Ok(Box::new(app))
        }),
    )
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
