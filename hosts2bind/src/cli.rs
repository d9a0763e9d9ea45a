use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "hosts2bind")]
#[command(about = "Convert a hosts file into BIND zone files")]
pub struct Cli {
    /// The hosts file to convert.
    pub hosts_file: PathBuf,
    /// Directory for generated zone files and the named.zones include.
    #[arg(short, long, default_value = "bindconf")]
    pub output: PathBuf,
    /// Show progress as zones are discovered and written.
    #[arg(short, long)]
    pub verbose: bool,
    /// Conversion summary format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
