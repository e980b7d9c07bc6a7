use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
	name = "sui-receipt",
	about = "Record reward receipts and writer roles on Sui.",
	version
)]
pub struct Cli {
	/// Network to connect to.
	#[arg(short = 'n', long, default_value = "devnet", global = true)]
	pub network: Network,

	/// Override fullnode RPC endpoint URL.
	#[arg(long, global = true)]
	pub rpc_url: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Clone, ValueEnum)]
pub enum Network {
	Devnet,
	Testnet,
	Mainnet,
	Localnet,
}

impl Network {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Devnet => "devnet",
			Self::Testnet => "testnet",
			Self::Mainnet => "mainnet",
			Self::Localnet => "localnet",
		}
	}
}

#[derive(Subcommand)]
pub enum Command {
	/// Query and top up account balances.
	Balance {
		#[command(subcommand)]
		command: BalanceCommand,
	},

	/// Record transfer receipts on-chain.
	Receipt {
		#[command(subcommand)]
		command: ReceiptCommand,
	},

	/// Manage writer roles for the receipt contract.
	Writer {
		#[command(subcommand)]
		command: WriterCommand,
	},
}

// -- Balance subcommands --

#[derive(Subcommand)]
pub enum BalanceCommand {
	/// Show the balance of an address.
	Get {
		/// Address to query (0x-prefixed).
		#[arg(short, long)]
		address: String,
	},

	/// Request faucet funds and show the balance before and after.
	Topup {
		/// Recipient address (0x-prefixed).
		#[arg(short, long)]
		address: String,
	},
}

// -- Receipt subcommands --

#[derive(Subcommand)]
pub enum ReceiptCommand {
	/// Sign and submit an add_receipt call, then report the created receipt.
	Add {
		/// Encoded signer secret key (suiprivkey1...).
		#[arg(short = 'k', long)]
		priv_key: String,

		/// Receipt contract package ID.
		#[arg(short, long)]
		pkg: String,

		/// WriterRole object ID authorizing the signer.
		#[arg(short, long)]
		writer_role: String,

		/// Receipt recipient address.
		#[arg(short, long)]
		recipient: String,

		/// Reference of the transfer being receipted.
		#[arg(short, long)]
		transfer_tx: String,

		/// Receipt format version tag.
		#[arg(short = 'v', long, default_value = "v1.0")]
		ver: String,

		/// Receipt timestamp in milliseconds. Defaults to now.
		#[arg(short = 's', long)]
		timestamp: Option<u64>,

		/// URI of the off-chain receipt metadata.
		#[arg(short, long)]
		meta_data_uri: String,
	},
}

// -- Writer subcommands --

#[derive(Subcommand)]
pub enum WriterCommand {
	/// Sign and submit an add_writer call, then show the updated role object.
	Add {
		/// Encoded signer secret key (suiprivkey1...).
		#[arg(short = 'k', long)]
		priv_key: String,

		/// Receipt contract package ID.
		#[arg(short, long)]
		pkg: String,

		/// AdminRole object ID authorizing the change.
		#[arg(short, long)]
		admin_role: String,

		/// WriterRole object ID to update.
		#[arg(short, long)]
		writer_role: String,

		/// Account address to grant write access.
		#[arg(short = 'u', long)]
		account: String,
	},
}
