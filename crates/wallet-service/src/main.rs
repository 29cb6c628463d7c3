//! Main entry point for the wallet state tool.
//!
//! Loads the configuration, hydrates the store from the configured storage
//! and runs one command against it: replaying an action log, repairing the
//! persisted address book, or listing the active wallet's recent
//! transactions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wallet_config::Config;
use wallet_core::Action;

mod factory_registry;

/// Command-line arguments for the wallet tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
	/// Dispatch every action of a JSON array, persist, and print the state
	Replay {
		/// File holding the actions
		actions: PathBuf,
	},
	/// Load and repair the address book, then write it back
	RepairAddressBook,
	/// Print the active wallet's recent transactions on the active network
	RecentTransactions,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};

	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	// Logs go to stderr so command output stays parseable
	fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();

	let config = Config::from_file(&args.config).await?;
	tracing::info!("Loaded configuration [{}]", config.wallet.id);

	let (mut store, storage) = factory_registry::build_store_from_config(config).await?;

	match args.command {
		Command::Replay { actions } => {
			let content = tokio::fs::read_to_string(&actions).await?;
			let actions: Vec<Action> = serde_json::from_str(&content)?;
			tracing::info!(count = actions.len(), "Replaying actions");

			for action in &actions {
				store.dispatch(action);
			}
			store.persist(&storage).await?;

			println!("{}", serde_json::to_string_pretty(store.state())?);
		},
		Command::RepairAddressBook => {
			// Hydration already repaired it
			store.persist(&storage).await?;
			println!("{}", store.state().address_book.entries.len());
		},
		Command::RecentTransactions => {
			let transactions = store.recent_wallet_transactions();
			println!("{}", serde_json::to_string_pretty(&transactions)?);
		},
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_replay() {
		let args = Args::try_parse_from(["wallet", "--config", "wallet.toml", "replay", "actions.json"])
			.unwrap();
		assert_eq!(args.config, PathBuf::from("wallet.toml"));
		assert_eq!(args.log_level, "info");
		assert_eq!(
			args.command,
			Command::Replay {
				actions: PathBuf::from("actions.json")
			}
		);
	}

	#[test]
	fn test_parse_commands() {
		let args = Args::try_parse_from(["wallet", "-l", "debug", "repair-address-book"]).unwrap();
		assert_eq!(args.log_level, "debug");
		assert_eq!(args.command, Command::RepairAddressBook);

		let args = Args::try_parse_from(["wallet", "recent-transactions"]).unwrap();
		assert_eq!(args.config, PathBuf::from("config.toml"));
		assert_eq!(args.command, Command::RecentTransactions);

		assert!(Args::try_parse_from(["wallet"]).is_err());
	}
}
