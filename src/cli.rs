use crate::analyzers::ParsePolicy;
use crate::config::DEFAULT_CONFIG_FILE;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flowgen")]
#[command(about = "Generates a flow handler registry from Go sources", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the configured directory and write the registry (default)
    Generate(GenerateArgs),

    /// Print the handler functions found in a directory
    List {
        /// Directory to scan (defaults to `dir_name` from the config)
        dir: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Abort on the first file with syntax errors
        #[arg(long)]
        strict: bool,

        /// Print names as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Write a starter configuration file
    Init {
        /// Configuration file to create
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory containing go.mod (defaults to the current directory)
    #[arg(long = "module-dir", env = "FLOWGEN_MODULE_DIR")]
    pub module_dir: Option<PathBuf>,

    /// Abort on the first file with syntax errors
    #[arg(long)]
    pub strict: bool,
}

pub fn parse_policy(strict: bool) -> ParsePolicy {
    if strict {
        ParsePolicy::Strict
    } else {
        ParsePolicy::Lenient
    }
}
