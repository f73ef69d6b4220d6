use clap::Parser;
use lounge_search::{ui, DataSource, ImageCache};

/// Search credit cards and see which airport lounges they unlock
#[derive(Parser, Debug)]
#[command(name = "lounge_search")]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file path or http(s) URL with the lounge data
    #[arg(short, long, default_value = "Lounge.csv")]
    source: String,

    /// Directory for downloaded lounge images (default: platform cache dir)
    #[arg(long)]
    image_cache_dir: Option<String>,

    /// Do not download lounge images
    #[arg(long, default_value_t = false)]
    no_images: bool,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=lounge_search=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let source = DataSource::parse(&args.source);
    log::info!("Starting Lounge Search with data from {}", source);

    let image_cache = match &args.image_cache_dir {
        Some(dir) => ImageCache::with_dir(dir),
        None => ImageCache::new(),
    };

    let config = ui::AppConfig {
        source,
        image_cache,
        load_images: !args.no_images,
    };

    if let Err(e) = ui::launch_gui(config) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
