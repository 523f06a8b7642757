//! CLI module for filekit
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::encoding::TextEncoding;
use crate::schemas::Format;

/// Filekit - Read, write and append JSON, CSV, YAML and plain-text files
#[derive(Parser, Debug)]
#[command(name = "filekit")]
#[command(version)]
#[command(about = "Read, write and append JSON, CSV, YAML and plain-text files")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory (relative paths and filekit.json are resolved here)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Text encoding of the file (e.g. utf-8, windows-1251, utf-16le)
    #[arg(long, global = true)]
    pub encoding: Option<TextEncoding>,

    /// CSV field delimiter
    #[arg(long, global = true)]
    pub delimiter: Option<char>,

    /// File format (json, csv, text, yaml); detected from the extension by default
    #[arg(long, global = true)]
    pub format: Option<Format>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the contents of a file
    Read {
        /// Path to the file
        path: PathBuf,
    },

    /// Overwrite a file with a payload
    Write {
        /// Path to the file
        path: PathBuf,

        /// Payload to write (reads from stdin if not provided)
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Append a payload to a file
    Append {
        /// Path to the file
        path: PathBuf,

        /// Payload to append (reads from stdin if not provided)
        #[arg(short, long)]
        data: Option<String>,
    },

    /// List supported formats and whether they are available in this build
    Formats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Per-invocation overrides taken from the global flags
    pub fn overrides(&self) -> commands::Overrides {
        commands::Overrides {
            encoding: self.encoding,
            delimiter: self.delimiter,
            format: self.format,
        }
    }
}
