//! Weather assistant CLI
//!
//! Interactive terminal session: ask about the weather, detect your location,
//! and have answers read aloud.

#![allow(clippy::print_stdout)]

mod render;
mod repl;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use infrastructure::{AppConfig, build_assistant, init_tracing};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::repl::{HELP, Repl, Step};

/// Weather assistant CLI
#[derive(Parser)]
#[command(name = "weather-assistant")]
#[command(author, version, about = "Conversational weather assistant", long_about = None)]
struct Cli {
    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.verbose > 0 {
        config.logging.level = log_filter_from_verbosity(cli.verbose).to_string();
    }

    init_tracing(&config.logging)?;
    config.validate()?;
    debug!(?config, "Configuration loaded");

    let voice = config.speech.voice()?;
    let assistant = build_assistant(&config)?;
    info!(speech = assistant.speech_enabled(), %voice, "Assistant ready");

    println!("🌦️  Weather Assistant\n");
    println!("{HELP}\n");

    let mut repl = Repl::new(&assistant, voice);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match repl.handle(&line).await {
            Step::Continue(output) if output.is_empty() => {},
            Step::Continue(output) => println!("\n{output}\n"),
            Step::Quit => break,
        }
    }

    println!("👋 Bye");
    Ok(())
}
