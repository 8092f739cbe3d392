//! dashboard-shell: renders the themed dashboard header in the terminal and
//! exports the active palette or token table.
//!
//! This binary is the composition root: it owns the one [`ThemeSession`],
//! wires the mode switch to the session's toggle, and injects a
//! [`ThemeContext`](dashboard_theme::ThemeContext) into every view.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use dashboard_theme::{InitialMode, SessionSettings, ThemeSession};

mod scenes;

use scenes::{Dashboard, ModeSwitch};

#[derive(Parser, Debug)]
#[command(name = "dashboard-shell", version, about = "Themed dashboard shell")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Initial color mode, overriding the settings file
    #[arg(long, value_enum, global = true)]
    mode: Option<ModeArg>,

    /// Session settings file (YAML)
    #[arg(long, global = true, env = "DASHBOARD_THEME_CONFIG")]
    config: Option<PathBuf>,

    /// Press the light/dark switch this many times before rendering
    #[arg(long, default_value_t = 0, global = true)]
    toggle: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Render the dashboard page (default)
    Show,
    /// Print the resolved palette and typography
    Palette {
        #[arg(long, value_enum, default_value = "yaml")]
        format: Format,
    },
    /// Print the full token table for the active mode
    Tokens {
        #[arg(long, value_enum, default_value = "yaml")]
        format: Format,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ModeArg {
    Dark,
    Light,
    System,
}

impl From<ModeArg> for InitialMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Dark => InitialMode::Dark,
            ModeArg::Light => InitialMode::Light,
            ModeArg::System => InitialMode::System,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Set up tracing/logging based on verbosity level
fn setup_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .init();
}

fn load_settings(cli: &Cli) -> Result<SessionSettings> {
    let mut settings = match &cli.config {
        Some(path) => SessionSettings::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => SessionSettings::default(),
    };
    if let Some(mode) = cli.mode {
        settings.initial_mode = mode.into();
    }
    Ok(settings)
}

fn run(cli: &Cli) -> Result<String> {
    let settings = load_settings(cli)?;
    let session = ThemeSession::from_settings(&settings);
    tracing::info!(mode = %session.mode(), "theme session started");

    let switch = ModeSwitch::new(session.color_mode());
    for _ in 0..cli.toggle {
        switch.press();
    }

    let ctx = session.context();
    match cli.command.unwrap_or(Command::Show) {
        Command::Show => Ok(Dashboard::new(ctx).render()),
        Command::Palette { format } => match format {
            Format::Json => Ok(ctx.theme.to_json()? + "\n"),
            Format::Yaml => Ok(ctx.theme.to_yaml()?),
        },
        Command::Tokens { format } => {
            let table = ctx.theme.tokens();
            match format {
                Format::Json => {
                    let json = serde_json::to_string_pretty(table)
                        .context("Failed to serialize token table")?;
                    Ok(json + "\n")
                }
                Format::Yaml => {
                    serde_yaml::to_string(table).context("Failed to serialize token table")
                }
            }
        }
    }
}
