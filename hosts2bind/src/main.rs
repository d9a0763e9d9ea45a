use anyhow::Result;
use clap::Parser;

mod cli;
mod convert;

use cli::Cli;

fn main() -> Result<()> {
    convert::run_convert(Cli::parse())
}
