use anyhow::Result;
use clap::Parser;

mod call;
mod cli;
mod commands;
mod config;
mod error;
mod keys;
mod rpc;
mod submit;
mod types;
mod unit;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	match &cli.command {
		Command::Balance { command } => commands::balance::run(&cli, command).await,
		Command::Receipt { command } => commands::receipt::run(&cli, command).await,
		Command::Writer { command } => commands::writer::run(&cli, command).await,
	}
}
