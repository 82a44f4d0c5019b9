//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Blogconf site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: blog.toml)
    #[arg(short = 'C', long, default_value = "blog.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the canonical site URL from the config file.
    ///
    /// Useful for CI deployments where the production URL differs from the
    /// one committed in blog.toml.
    #[arg(short = 'U', long = "website", global = true, value_hint = clap::ValueHint::Url)]
    pub website: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new blog configuration from the starter template
    #[command(visible_alias = "i")]
    Init {
        /// Blog directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the starter config to stdout instead of writing files
        #[arg(short, long)]
        dry: bool,
    },

    /// Load and validate the configuration, printing a summary
    #[command(visible_alias = "c")]
    Check {
        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Print the resolved configuration as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Filter output to specific sections (comma-separated, e.g. site,social)
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Only include active social links in the output roster
    #[arg(short, long)]
    pub active: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }
}
