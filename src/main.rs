mod app;
mod cli_messages;
mod config;
mod consts;
mod error_classifier;
mod loader;
mod logging;
mod model;
mod source;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::dash_consts::SOURCE_ENV_VAR;
use crate::source::SourceLocation;
use crate::ui::dashboard::{PageState, render_page};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Renders the Code Monkeys product dashboard from JSON fixtures
struct Args {
    /// Config file (defaults to ~/.codemonkeys/dash.json)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the fixtures and write the dashboard page
    Render {
        /// Dash root: a directory or an http(s) URL. Overrides DASH_SOURCE and the config.
        #[arg(long, value_name = "DIR_OR_URL")]
        source: Option<String>,

        /// Where to write the page
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page title
        #[arg(long)]
        title: Option<String>,
    },
    /// Write a default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init().map_err(|e| format!("Failed to initialize logging: {}", e))?;

    let args = Args::parse();
    let config_path = match args.config {
        Some(path) => path,
        None => get_config_path()?,
    };

    match args.command {
        Command::Render {
            source,
            output,
            title,
        } => {
            if !config_path.exists() {
                print_cmd_warn!(
                    "No config file found",
                    "using defaults ({} does not exist)",
                    config_path.display()
                );
            }
            let config = Config::load_or_default(&config_path)
                .map_err(|e| format!("Failed to load config {}: {}", config_path.display(), e))?;
            let source = source
                .or_else(|| std::env::var(SOURCE_ENV_VAR).ok())
                .unwrap_or_else(|| config.source.clone());
            let output = output.unwrap_or_else(|| config.output.clone());
            let title = title.unwrap_or_else(|| config.title.clone());
            render(&config, &source, &output, &title).await
        }
        Command::Init { force } => {
            if config_path.exists() && !force {
                return Err(Box::from(format!(
                    "Config already exists at {}. Use --force to overwrite it.",
                    config_path.display()
                )));
            }
            Config::default()
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Config written", "{}", config_path.display());
            Ok(())
        }
    }
}

/// Runs the load sequence and writes the resulting page, including the error
/// page when the manifest cannot be loaded.
async fn render(
    config: &Config,
    source: &str,
    output: &Path,
    title: &str,
) -> Result<(), Box<dyn Error>> {
    let location: SourceLocation = source.parse()?;
    let fixtures = location.open()?;
    print_cmd_info!("Rendering dashboard", "source: {}", fixtures.location());

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    // The page reads as loading until the sequence below settles.
    fs::write(output, render_page(title, &PageState::Loading))?;

    let state = app::run(fixtures.as_ref(), &config.nexus).await;
    fs::write(output, render_page(title, &state))?;

    match state {
        PageState::Failed(message) => {
            print_cmd_error!("Dashboard failed to load", message.as_str());
            Err(Box::from(format!(
                "{} (error page written to {})",
                message,
                output.display()
            )))
        }
        _ => {
            print_cmd_success!("Dashboard written", "{}", output.display());
            Ok(())
        }
    }
}
