//! Command-line argument parsing
//!
//! Parses `mcp-console [command]`.

/// Parsed command from the first CLI argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the console window: (none) or `run`
    Run,
    /// Print config path and effective settings: `config`
    Config,
    /// Show help: `help`
    Help,
    /// Print version: `version`
    Version,
    /// Anything else
    Unknown(String),
}

impl Command {
    /// Parse the argument list (without the program name)
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let Some(first) = args.first() else {
            return Command::Run;
        };

        match first.as_ref().trim() {
            "" | "run" => Command::Run,
            "config" => Command::Config,
            "help" | "--help" | "-h" => Command::Help,
            "version" | "--version" | "-V" => Command::Version,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"MCP Console - desktop UI for the MCP agent and user-manager backends

Usage: mcp-console [command]

Commands:
  (none), run      Open the console window
  config           Show the config file path and effective settings
  help             Show this help message
  version          Show version

Logging follows RUST_LOG, or `log.filter` in the config file."#
    }
}
