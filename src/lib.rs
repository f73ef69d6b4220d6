pub mod catalog;
pub mod error;
pub mod image_cache;
pub mod io;
pub mod models;
pub mod search;
pub mod source;
pub mod state;
pub mod ui;

// Re-export commonly used items
pub use catalog::{unique_card_names, CardCatalog};
pub use error::{LoadError, LoadResult};
pub use image_cache::ImageCache;
pub use io::{parse_lounges, read_lounges};
pub use models::Lounge;
pub use search::{filter_card_names, SearchMode};
pub use source::{fetch_lounges_async, DataSource};
pub use state::{LoadStatus, Phase, SearchState, Selection};
