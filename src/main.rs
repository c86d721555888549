//! pagemap - maps markdown content and a product catalog to static pages.

mod cli;
mod config;
mod content;
mod core;
mod logger;
mod render;
mod site;
mod utils;

use std::sync::Arc;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Arc::new(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(config).map(|_| ()),
        Commands::Plan { json } => cli::plan::print_plan(config, *json),
        Commands::Aliases => cli::build::print_aliases(config),
    }
}
