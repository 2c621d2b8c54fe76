//! Lanai - Main entrypoint.
//!
//! Loads configuration, initializes logging, reads the configured corpora and
//! answers dictionary or music finder queries on the console.

use clap::{Parser, Subcommand};
use lanai::config::{ConfigLoader, LanaiConfig, LogConfig, ENV_PREFIX};
use lanai::corpus::{Catalog, CorpusLoader};
use lanai::data_structures::LanaiTrie;
use lanai::error::{
    report_error, set_error_reporter, ErrorContext, LanaiError, LanaiResult, TracingErrorReporter,
};
use lanai::render;
use lanai::session::Session;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Print suggestion results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive dictionary menu
    Dict,

    /// Check whether an entry is in the dictionary
    Contains {
        /// Entry to look up
        entry: String,
    },

    /// Show dictionary suggestions for a prefix
    Suggest {
        /// Prefix to complete
        prefix: String,
    },

    /// Search albums, songs and artists for a prefix
    Music {
        /// Prefix to complete
        prefix: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to stderr so stdout stays clean.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if log.json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the dictionary corpus into a fresh trie.
fn load_dictionary(config: &LanaiConfig) -> LanaiResult<LanaiTrie> {
    let mut trie = LanaiTrie::with_config(config.trie.clone());
    CorpusLoader::new(config.corpus.on_invalid).load_file(&config.corpus.dictionary, &mut trie)?;
    info!(
        path = %config.corpus.dictionary.display(),
        entries = trie.len(),
        "Successfully populated the dictionary"
    );
    Ok(trie)
}

fn run(command: Command, config: &LanaiConfig, json: bool) -> LanaiResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Dict => {
            let mut trie = load_dictionary(config)?;
            render::write_populated(&mut out, &config.corpus.dictionary)?;
            let stdin = io::stdin();
            Session::new(&mut trie, stdin.lock(), &mut out).run()?;
        }
        Command::Contains { entry } => {
            let trie = load_dictionary(config)?;
            let present = trie.contains(&entry)?;
            if json {
                let body = serde_json::json!({ "entry": entry, "present": present });
                serde_json::to_writer(&mut out, &body)?;
                writeln!(out)?;
            } else if present {
                writeln!(out, "{entry} is present in the trie")?;
            } else {
                writeln!(out, "{entry} is not present in the trie")?;
            }
        }
        Command::Suggest { prefix } => {
            let trie = load_dictionary(config)?;
            let outcome = trie.suggest(&prefix)?;
            if json {
                serde_json::to_writer(&mut out, &outcome)?;
                writeln!(out)?;
            } else {
                render::write_outcome(&mut out, &prefix, &outcome)?;
            }
        }
        Command::Music { prefix } => {
            let loader = CorpusLoader::new(config.corpus.on_invalid);
            let catalog = Catalog::load(config.corpus.music_sources(), &loader, &config.trie)?;
            let results = catalog.suggest_all(&prefix)?;
            if json {
                let sections: serde_json::Map<String, serde_json::Value> = results
                    .iter()
                    .map(|(name, outcome)| Ok((name.to_string(), serde_json::to_value(outcome)?)))
                    .collect::<Result<_, serde_json::Error>>()?;
                serde_json::to_writer(&mut out, &sections)?;
                writeln!(out)?;
            } else {
                render::write_catalog(&mut out, &prefix, &results)?;
            }
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            writeln!(out, "Configuration is valid")?;
        }
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, LanaiConfig::default().to_toml()?)?;
            info!("Default configuration written to {:?}", output);
        }
    }

    out.flush()?;
    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = config_loader.load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();

    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            report_error(ErrorContext::new(e.into(), "config").with_span_trace());
            process::exit(1);
        }
    };

    let command = args.command.unwrap_or(Command::Dict);
    let component = format!("{command:?}");
    if let Err(e) = run(command, &config, args.json) {
        eprintln!("Error: {e}");
        report_error(ErrorContext::new(e, component).with_span_trace());
        process::exit(1);
    }
}
