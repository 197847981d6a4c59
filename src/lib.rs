//! tcreport library root.
//! Exposes the CLI parser, the high-level run() function, and the pipeline
//! modules (import → core → export).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use log::LevelFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => {
            let path = cli.config.clone().unwrap_or_else(Config::config_file);
            cli::commands::config::handle(&cli.command, cfg, &path)
        }
        Commands::Process { .. } => cli::commands::process::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command),
    }
}

/// Set up `env_logger`: `-v`/`-vv` win over `RUST_LOG`, default is warnings only.
pub fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_default_env();

    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }

    builder.format_timestamp(None).try_init().ok();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 2️⃣ load config once (alternate file from --config)
    let cfg = Config::load(cli.config.as_deref())?;

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
