//! Small Caps Launcher - GUI Application
//!
//! Run with: cargo run --bin smallcaps-launcher

use iced::application;
use tracing_subscriber::EnvFilter;

// Import from the library
use smallcaps::config::Config;
use smallcaps::gui::SmallCapsApp;

fn main() -> iced::Result {
    let (config, config_error) = Config::load_or_default();

    // Setup logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = config_error {
        tracing::warn!("⚠️ Using default config: {}", e);
    }

    let window_size = (config.window_width, config.window_height);

    application(SmallCapsApp::title, SmallCapsApp::update, SmallCapsApp::view)
        .theme(SmallCapsApp::theme)
        .window_size(window_size)
        .resizable(false)
        .run_with(move || SmallCapsApp::new(config))
}
