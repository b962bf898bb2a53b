use crate::config::OutputFormat;
use crate::naming::ProductGroup;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

/// `specname` - Compile two-column product spec sheets into catalog names.
#[derive(Parser, Debug)]
#[command(name = "specname")]
#[command(version = "0.1.0")]
#[command(about = "Builds canonical product names from Key/Value spec sheets.", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.specname/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log field resolution details
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile one spec sheet (CSV, or TSV by extension) into a product name
    Build {
        /// Spec sheet with Key,Value rows (or single "Key: Value" cells)
        input: PathBuf,

        /// Product group (default from config: naming.default_group)
        #[arg(short, long, value_enum)]
        group: Option<ProductGroup>,

        /// Output format (default from config: output.format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Also write the name to a CSV file with a "Generated Name" column
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the canonical keys read from a spec sheet
    Keys {
        input: PathBuf,
    },

    /// Show product groups and their always-present fields
    Groups,
}
