mod app;
mod components;
mod images;
mod screens;

pub use app::{launch_gui, AppConfig, LoungeSearchApp};
