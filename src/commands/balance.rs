use anyhow::Result;

use crate::cli::{BalanceCommand, Cli};
use crate::commands::resolve_rpc;
use crate::config::Config;
use crate::rpc::RpcClient;
use crate::unit;

pub async fn run(cli: &Cli, cmd: &BalanceCommand) -> Result<()> {
	let config = Config::load()?;
	let rpc = resolve_rpc(cli, &config);

	match cmd {
		BalanceCommand::Get { address } => get_balance(&rpc, address).await,
		BalanceCommand::Topup { address } => topup(cli, &config, &rpc, address).await,
	}
}

async fn get_balance(rpc: &RpcClient, address: &str) -> Result<()> {
	let balance = rpc.get_balance(address).await?;
	println!("balance (unit) {balance}");
	println!("balance {}", unit::from_unit(balance));
	Ok(())
}

async fn topup(cli: &Cli, config: &Config, rpc: &RpcClient, address: &str) -> Result<()> {
	let faucet_url = config.faucet_url(cli.network.as_str()).ok_or_else(|| {
		anyhow::anyhow!("network {} has no faucet", cli.network.as_str())
	})?;

	let before = rpc.get_balance(address).await?;
	println!("balance before (unit) {before}");
	println!("balance before {}", unit::from_unit(before));

	rpc.request_faucet(faucet_url, address).await?;

	let after = rpc.get_balance(address).await?;
	println!("balance after (unit) {after}");
	println!("balance after {}", unit::from_unit(after));

	Ok(())
}
