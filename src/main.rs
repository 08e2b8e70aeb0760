//! entigen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;

use entigen::commands::EntityCommand;

#[derive(Parser)]
#[command(name = "entigen")]
#[command(version)]
#[command(
    about = "Interactive entity scaffolding for generated Go projects",
    long_about = None
)]
struct Cli {
    /// Entity name (e.g. `User`, `Order`); run from the project directory
    name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cmd = EntityCommand::new(cli.name)?;
    cmd.execute()
}
