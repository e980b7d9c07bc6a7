pub mod balance;
pub mod receipt;
pub mod writer;

use anyhow::Result;

use crate::cli::Cli;
use crate::config::Config;
use crate::keys::Keypair;
use crate::rpc::RpcClient;

/// Build the RPC client from the CLI flag or config.
pub fn resolve_rpc(cli: &Cli, config: &Config) -> RpcClient {
	let url = cli
		.rpc_url
		.clone()
		.unwrap_or_else(|| config.rpc_url(cli.network.as_str()).to_owned());
	RpcClient::new(&url)
}

/// Decode the CLI-supplied secret key and report the derived address.
/// The key bytes live only inside this invocation.
pub fn open_keypair(priv_key: &str) -> Result<Keypair> {
	let keypair = Keypair::from_encoded(priv_key)?;
	println!("opened address {}", keypair.address());
	Ok(keypair)
}
