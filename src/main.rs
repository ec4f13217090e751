//! buildaux - an auxiliary tool for building a CMake project
//!
//! Wraps the configure and build steps of the project in the current
//! directory, plus cleaning and pulling `compile_commands.json` to the root.
//!
//! ## Architecture
//!
//! ```text
//! flags → cli dispatch → commands/ → exec (sh -c) → cmake / rm / cp
//! ```

mod build;
mod cli;
mod commands;
mod error;
mod exec;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
