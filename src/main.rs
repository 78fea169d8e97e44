use std::fs::File;
use std::path::PathBuf;

use anyhow::{anyhow, Context as _, Result};
use clap::Parser;
use ggez::event;
use grid_snake::app::SnakeApp;
use grid_snake::config::Settings;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic Snake in a window")]
struct Cli {
    /// JSON settings file; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Size of one grid cell in pixels
    #[arg(long)]
    unit_size: Option<u32>,

    /// Milliseconds between snake moves
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for apple placement
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(unit_size) = self.unit_size {
            settings.unit_size = unit_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            settings.tick_ms = tick_ms;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }

        settings.validate()?;
        Ok(settings)
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            WriteLogger::init(cli.log_level, Config::default(), file)
        }
        None => TermLogger::init(
            cli.log_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    }
    .context("failed to initialize logger")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let settings = cli.settings()?;
    info!(
        "starting {}x{} window, {} columns x {} rows, tick {}ms",
        settings.width,
        settings.height,
        settings.columns(),
        settings.rows(),
        settings.tick_ms
    );

    let window_setup = ggez::conf::WindowSetup::default()
        .title("Snake Game")
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(settings.width as f32, settings.height as f32)
        .resizable(false);

    let (ctx, event_loop) = ggez::ContextBuilder::new("grid_snake", "grid_snake")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()
        .map_err(|err| anyhow!("failed to create game window: {err}"))?;

    let app = SnakeApp::new(&settings);
    event::run(ctx, event_loop, app)
}
