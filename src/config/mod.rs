pub mod cli;
pub mod toml_config;

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "buildgen")]
#[command(about = "Build-time generators: module headers and argument blobs")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write the header defining MODULE_<NAME>_ENABLED for each module
    ModulesEnabled {
        /// Target header path
        #[arg(short, long)]
        output: PathBuf,

        /// Enabled module (repeatable); falls back to [modules] in --config
        #[arg(short, long = "module", value_delimiter = ',')]
        modules: Vec<String>,

        /// TOML build configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write an umbrella header including every given test header
    TestsHeader {
        #[arg(short, long)]
        output: PathBuf,

        headers: Vec<PathBuf>,
    },

    /// Run every generator enabled in the TOML configuration
    Generate {
        #[arg(short, long, default_value = "buildgen.toml")]
        config: PathBuf,

        /// Show what would be written without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Serialize the trailing arguments into an argument blob
    ArgsBlob {
        #[arg(short, long, default_value = crate::core::arg_blob::BLOB_FILE_NAME)]
        output: PathBuf,

        #[arg(last = true)]
        args: Vec<OsString>,
    },

    /// Print the arguments stored in an argument blob
    Decode {
        blob: PathBuf,

        #[arg(long)]
        json: bool,
    },
}
