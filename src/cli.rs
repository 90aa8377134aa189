use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "container-iso",
    about = "Normalize container type aliases to ISO 6346 codes and validate container serials",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file [default: ./.container-iso/config.toml, fallback ~/.config/container-iso/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify free-text container types (e.g. "reefer", "flt", "hi-cube")
    Classify {
        /// Type descriptions to classify
        inputs: Vec<String>,

        /// Size prefix for the full ISO code [default: from config, else 20]
        #[arg(short, long)]
        size: Option<String>,

        /// Read one description per line from a file
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Parse and validate ISO 6346 container serials
    Serial {
        /// Serials such as TCLU7024574
        serials: Vec<String>,

        /// Read one serial per line from a file
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Compute the check digit for the first 10 characters of a serial
    CheckDigit {
        /// Owner code, category and serial number, e.g. TCLU702457
        code: String,
    },

    /// Exact lookups in the container name table
    Lookup {
        #[command(subcommand)]
        target: LookupTarget,
    },

    /// List all ISO type codes with their names
    Codes,
}

#[derive(Subcommand, Debug)]
pub enum LookupTarget {
    /// Category name to ISO code (e.g. "flat rack")
    Name { name: String },
    /// ISO code to category name (e.g. RC)
    Code { code: String },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
