//! MCP Console: desktop UI for the MCP agent and user-manager backends
//!
//! Usage:
//!   mcp-console           - Open the console window
//!   mcp-console config    - Show config path and effective settings
//!   mcp-console help      - Show help

mod app;
mod backend;
mod commands;
mod config;
mod effect;
mod error;
mod ui;

use std::env;

use app::Console;
use commands::Command;
use config::Config;
use iced::{window, Size};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> iced::Result {
    let args: Vec<String> = env::args().skip(1).collect();

    match Command::parse(&args[..]) {
        Command::Run => start_console(),
        Command::Config => {
            show_config();
            Ok(())
        }
        Command::Help => {
            println!("{}", Command::help_text());
            Ok(())
        }
        Command::Version => {
            println!("mcp-console {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Unknown(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run 'mcp-console help' for usage");
            Ok(())
        }
    }
}

fn init_logging(default_filter: &str) {
    // RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init();
}

fn load_config() -> (Config, Option<anyhow::Error>) {
    match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    }
}

fn show_config() {
    match Config::default_config_path() {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (no config directory on this platform)"),
    }

    let (config, error) = load_config();
    if let Some(e) = error {
        eprintln!("Error: {:#}", e);
        eprintln!("Showing defaults instead.");
    }
    match config.to_toml() {
        Ok(text) => println!("\n{}", text),
        Err(e) => eprintln!("Error: {:#}", e),
    }
}

fn start_console() -> iced::Result {
    let (config, error) = load_config();
    init_logging(&config.log.filter);

    if let Some(e) = error {
        tracing::warn!("Could not load config, using defaults: {:#}", e);
    }

    tracing::info!(
        agent = %config.backend.agent_url,
        tools = %config.backend.tools_url,
        "Starting MCP Console"
    );

    let window_size = Size::new(config.ui.width, config.ui.height);

    iced::application(Console::title, Console::update, Console::view)
        .theme(Console::theme)
        .window(window::Settings {
            size: window_size,
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || Console::new(&config))
}
