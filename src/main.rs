//! Blogconf - site configuration manager for static blogs.

#![allow(dead_code)]

mod cli;
mod config;
mod embed;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::BlogConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = BlogConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_blog(&config, name.is_some(), *dry),
        Commands::Check { .. } => cli::check::run_check(&config),
        Commands::Query { args } => cli::query::run_query(&config, args),
    }
}
