use anyhow::Result;
use clap::Parser;

use lectern::app::App;
use lectern::config::{Config, default_config_path};

/// Lectern demo: one bookshelf screen on the shared lifecycle base.
#[derive(Debug, Parser)]
#[command(name = "lectern", version, about)]
struct Args {
    /// Path to the config file (defaults to ~/.config/lectern/config.toml)
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Delegate the status bar to the theme store instead of running
    /// full-screen
    #[arg(long)]
    windowed: bool,
}

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        // This ensures the terminal is usable after a panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        // Call the original panic hook to show the panic message
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_panic_hook();

    // Set up logging directory
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join("lectern");
    std::fs::create_dir_all(&log_dir)?;

    // Initialize tracing with file logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "lectern.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    let config_path = args.config.unwrap_or_else(default_config_path);
    let config = Config::load_or_create(&config_path)?;

    let mut app = App::new(config, !args.windowed)?;
    let result = app.run();

    drop(guard);

    result
}
