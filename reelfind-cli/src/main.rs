//! reelfind CLI - search the movie recommendation service from the terminal

mod interactive;
mod render;

use clap::{Parser, Subcommand};
use colored::Colorize;
use interactive::{parse_command, Command};
use reelfind_client::{SearchClient, SearchSession};
use reelfind_core::{Config, ErrorEnvelope, ReelfindError, SearchMode};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reelfind")]
#[command(about = "Search the movie recommendation service", long_about = None)]
struct Cli {
    /// Service URL (e.g., http://127.0.0.1:5000)
    #[arg(long, global = true, env = "REELFIND_SERVICE_URL")]
    service_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long, global = true, env = "REELFIND_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Report failed searches as errors instead of keeping the previous results
    #[arg(long, global = true)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print the results
    Search {
        /// Field to search by: title, rating, budget, country or language
        #[arg(value_parser = parse_mode)]
        mode: SearchMode,

        /// Value to search for
        value: String,
    },

    /// Search repeatedly from a prompt
    Interactive {
        /// Starting mode (default from config)
        #[arg(long, value_parser = parse_mode)]
        mode: Option<SearchMode>,
    },

    /// List search modes and their inputs
    Modes,
}

fn parse_mode(s: &str) -> reelfind_core::Result<SearchMode> {
    s.parse()
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Search { mode, ref value } => cmd_search(&cli, mode, value).await,
        Commands::Interactive { mode } => cmd_interactive(&cli, mode).await,
        Commands::Modes => cmd_modes(cli.json),
    };

    if let Err(e) = result {
        if cli.json {
            let envelope = ErrorEnvelope::from(&e);
            match serde_json::to_string_pretty(&envelope) {
                Ok(body) => eprintln!("{}", body),
                Err(_) => eprintln!("Error: {}", e),
            }
        } else {
            eprintln!("{}: {}", "Error".red(), e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file (if any) with the service URL override applied
fn load_config(cli: &Cli) -> reelfind_core::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(url) = &cli.service_url {
        config.service.base_url = url.clone();
    }
    tracing::debug!(base_url = %config.service.base_url, "config loaded");
    Ok(config)
}

fn make_session(config: &Config, mode: SearchMode) -> reelfind_core::Result<SearchSession> {
    let client = SearchClient::from_config(config)?;
    Ok(SearchSession::new(client, mode))
}

async fn cmd_search(cli: &Cli, mode: SearchMode, value: &str) -> reelfind_core::Result<()> {
    let config = load_config(cli)?;
    let session = make_session(&config, mode)?;
    session.set_value(value);
    run_search(&session, cli.json, cli.strict).await
}

async fn cmd_interactive(cli: &Cli, mode: Option<SearchMode>) -> reelfind_core::Result<()> {
    let config = load_config(cli)?;
    let session = make_session(&config, mode.unwrap_or(config.search.default_mode))?;

    if !cli.json {
        println!("{}", render::render_banner(session.client().base_url()));
        println!("{}", interactive::HELP.dimmed());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if !cli.json {
            print!("{}", render::render_prompt(session.view().mode));
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Command::Empty => {}
            Command::Mode(mode) => session.set_mode(mode),
            Command::Value(value) => session.set_value(value),
            Command::Submit(value) => {
                session.set_value(value);
                report(run_search(&session, cli.json, cli.strict).await);
            }
            Command::Search => report(run_search(&session, cli.json, cli.strict).await),
            Command::Show => print_view(&session, cli.json)?,
            Command::Modes => println!("{}", render::render_modes(Some(session.view().mode))),
            Command::Help => println!("{}", interactive::HELP),
            Command::Quit => break,
            Command::Invalid(message) => eprintln!("{}: {}", "Warning".yellow(), message),
        }
    }
    Ok(())
}

/// Errors inside the prompt loop are printed and the loop keeps going.
fn report(result: reelfind_core::Result<()>) {
    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red(), e);
    }
}

async fn run_search(session: &SearchSession, json: bool, strict: bool) -> reelfind_core::Result<()> {
    let pending = session.search();
    if !json && session.is_loading() {
        eprintln!("{}", "Searching...".dimmed());
    }

    match pending.await {
        Ok(_) => {}
        // Already logged; the view still shows the previous results.
        Err(e) if e.is_search_failure() && !strict => {}
        Err(e) => return Err(e),
    }

    print_view(session, json)
}

fn print_view(session: &SearchSession, json: bool) -> reelfind_core::Result<()> {
    let view = session.view();
    if json {
        print_json(&view)
    } else {
        println!("{}", render::render_view(&view));
        Ok(())
    }
}

fn cmd_modes(json: bool) -> reelfind_core::Result<()> {
    if json {
        #[derive(Serialize)]
        struct ModeInfo {
            mode: SearchMode,
            label: &'static str,
            query_key: &'static str,
            path: String,
            input: String,
        }

        let modes: Vec<ModeInfo> = SearchMode::all()
            .into_iter()
            .map(|mode| ModeInfo {
                mode,
                label: mode.label(),
                query_key: mode.query_key(),
                path: mode.path(),
                input: mode.input().to_string(),
            })
            .collect();
        print_json(&modes)
    } else {
        println!("{}", render::render_modes(None));
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> reelfind_core::Result<()> {
    let body = serde_json::to_string_pretty(value).map_err(ReelfindError::from)?;
    println!("{}", body);
    Ok(())
}
