//! indexbar - a terminal directory with a scroll-synchronized index sidebar
//!
//! Entries are grouped by initial letter. The sidebar highlights the group
//! at the top of the list, pins its header while scrolling, and jumps to a
//! group on tap or vertical drag.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indexbar_core::{config, IndexBarConfig};

mod tui;

use tui::app::MarkerSource;
use tui::directory::Directory;

/// indexbar - scroll-synchronized index sidebar
#[derive(Parser)]
#[command(name = "indexbar")]
#[command(about = "Browse a grouped directory with an A-Z index sidebar", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.indexbar/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory data file (TOML, `entries = [...]`); built-in sample if omitted
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Disable sticky group headers
    #[arg(long)]
    no_sticky: bool,

    /// Rows kept clear above a pinned header
    #[arg(long)]
    sticky_offset: Option<f64>,

    /// Colour of the active marker (name or #rrggbb)
    #[arg(long)]
    highlight: Option<String>,

    /// Stacking order of the pinned headers
    #[arg(long)]
    z_index: Option<i32>,

    /// Where sidebar markers come from
    #[arg(long, value_enum, default_value_t = MarkerSource::Groups)]
    markers: MarkerSource,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the directory (default)
    Browse,

    /// Print the effective configuration
    Config,
}

impl Cli {
    /// File config with command-line overrides applied
    fn effective_config(&self) -> Result<IndexBarConfig> {
        let mut config = IndexBarConfig::load_or_default(self.config.as_deref())
            .context("Failed to load config")?;
        if self.no_sticky {
            config.sticky = false;
        }
        if let Some(offset) = self.sticky_offset {
            config.sticky_offset_top = offset;
        }
        if let Some(color) = &self.highlight {
            config.highlight_color = Some(color.clone());
        }
        if let Some(z_index) = self.z_index {
            config.z_index = Some(z_index);
        }
        config.validate().context("Invalid command-line override")?;
        Ok(config)
    }

    fn directory(&self) -> Result<Directory> {
        match &self.data {
            Some(path) => Directory::load(path),
            None => Ok(Directory::sample()),
        }
    }
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file; the terminal belongs to the TUI
fn init_logging() -> Result<()> {
    let log_dir = config::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = match std::fs::File::create(log_dir.join("indexbar.log")) {
        Ok(file) => file,
        Err(_) => std::fs::File::create(null_device).context("Failed to open null device")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging()?;

    let cli = Cli::parse();
    let config = cli.effective_config()?;

    match &cli.command {
        Some(Commands::Config) => {
            let rendered = toml::to_string(&config).context("Failed to render config")?;
            print!("{}", rendered);
        }
        Some(Commands::Browse) | None => {
            let directory = cli.directory()?;
            tracing::info!(
                sticky = config.sticky,
                sticky_offset_top = config.sticky_offset_top,
                "Starting indexbar"
            );
            let mut app =
                tui::App::new(config, directory, cli.markers).with_data_path(cli.data.clone());
            app.run().await?;
        }
    }

    Ok(())
}
