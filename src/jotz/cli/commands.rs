//! # CLI Layer
//!
//! The only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, whether stdin is piped)
//! - Reads the clock and the environment
//! - Installs a tracing subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_logging()`: stderr subscriber filtered by `JOTZ_LOG`
//! - `init_context()`: Resolves the data directory, loads config, builds the API
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{
    print_messages, render_config_values, render_json, render_keywords, render_previews,
    render_records, Emphasis,
};
use super::setup::{Cli, Commands};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::control::SHOULD_COLORIZE;
use directories::ProjectDirs;
use jotz::api::{CmdResult, ConfigAction, JotzApi};
use jotz::codec;
use jotz::config::JotzConfig;
use jotz::error::{JotzError, Result};
use jotz::store::fs::FileStore;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const DATA_DIR_ENV: &str = "JOTZ_HOME";
const LOG_ENV: &str = "JOTZ_LOG";

struct AppContext {
    api: JotzApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context()?;
    let command = cli.command.unwrap_or(Commands::List {
        full: false,
        json: false,
    });

    match command {
        Commands::Add { words } => handle_add(ctx, words),
        Commands::Search { words, json } => {
            let result = ctx.api.search(&words.join(" "))?;
            print_records(&ctx, &result, json)
        }
        Commands::Today { json } => {
            let result = ctx.api.today(Utc::now())?;
            print_records(&ctx, &result, json)
        }
        Commands::Yesterday { json } => {
            let result = ctx.api.yesterday(Utc::now())?;
            print_records(&ctx, &result, json)
        }
        Commands::On { date, json } => {
            let date = parse_day(&date)?;
            let result = ctx.api.records_on(date)?;
            print_records(&ctx, &result, json)
        }
        Commands::List { full, json } => handle_list(&ctx, full, json),
        Commands::Keywords { set, clear } => handle_keywords(ctx, set, clear),
        Commands::Fav { selector, json } => {
            let result = ctx.api.search_saved(&selector)?;
            print_records(&ctx, &result, json)
        }
        Commands::Dedup => {
            let mut ctx = ctx;
            let result = ctx.api.dedup()?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Export { path } => handle_export(&ctx, path),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("jotz={}", default_level)));

    // A second init (e.g. in tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "jotz", "jotz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            JotzError::Config(format!(
                "Could not determine a data directory; set {}",
                DATA_DIR_ENV
            ))
        })
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = JotzConfig::load(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "loaded config");

    let store = FileStore::from_config(data_dir.clone(), &config);
    Ok(AppContext {
        api: JotzApi::new(store, config, data_dir),
    })
}

fn emphasis(marker: &jotz::rank::Marker) -> Emphasis<'_> {
    if std::io::stdout().is_terminal() && SHOULD_COLORIZE.should_colorize() {
        Emphasis::Styled
    } else {
        Emphasis::Marked(marker)
    }
}

fn print_records(ctx: &AppContext, result: &CmdResult, json: bool) -> Result<()> {
    if json {
        println!("{}", render_json(&result.listed_records)?);
        return Ok(());
    }

    let marker = ctx.api.config().marker();
    print!(
        "{}",
        render_records(
            &result.listed_records,
            result.highlight.as_ref(),
            &emphasis(&marker)
        )
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(mut ctx: AppContext, words: Vec<String>) -> Result<()> {
    let body = if words.is_empty() && !std::io::stdin().is_terminal() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(JotzError::Io)?;
        // Only the newline the shell or editor appended; inner blank lines stay.
        buffer.trim_end_matches(['\n', '\r']).to_string()
    } else {
        words.join(" ")
    };

    let result = ctx.api.save_entry(&body, Utc::now())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, full: bool, json: bool) -> Result<()> {
    let result = ctx.api.list()?;
    if json || full {
        return print_records(ctx, &result, json);
    }
    print!("{}", render_previews(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_keywords(mut ctx: AppContext, set: Option<Vec<String>>, clear: bool) -> Result<()> {
    let result = match set {
        Some(keywords) => ctx.api.save_keywords(&keywords)?,
        None if clear => ctx.api.save_keywords::<String>(&[])?,
        None => ctx.api.keywords()?,
    };
    print!("{}", render_keywords(&result.keywords));
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<String>) -> Result<()> {
    let dest = path.map(PathBuf::from);
    let result = ctx.api.export(dest.as_deref())?;
    if let Some(raw) = &result.exported {
        print!("{}", raw);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.configure(action)?;
    print!("{}", render_config_values(&result.config_values));
    print_messages(&result.messages);
    Ok(())
}

/// Accepts the display form (`2024-03-01`) and the tag form (`2024:03:01`).
fn parse_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| codec::parse_date_tag(input))
        .ok_or_else(|| JotzError::Api(format!("Invalid date '{}', expected YYYY-MM-DD", input)))
}
