use anyhow::Result;

use crate::call;
use crate::cli::{Cli, WriterCommand};
use crate::commands::{open_keypair, resolve_rpc};
use crate::config::Config;
use crate::rpc::RpcClient;
use crate::submit;
use crate::unit;

pub async fn run(cli: &Cli, cmd: &WriterCommand) -> Result<()> {
	let config = Config::load()?;
	let rpc = resolve_rpc(cli, &config);

	match cmd {
		WriterCommand::Add {
			priv_key,
			pkg,
			admin_role,
			writer_role,
			account,
		} => add_writer(&rpc, priv_key, pkg, admin_role, writer_role, account).await,
	}
}

/// Grant write access to `account`, then fetch and show the updated
/// writer role object.
async fn add_writer(
	rpc: &RpcClient,
	priv_key: &str,
	pkg: &str,
	admin_role: &str,
	writer_role: &str,
	account: &str,
) -> Result<()> {
	let keypair = open_keypair(priv_key)?;
	let sender = keypair.address();

	let balance = rpc.get_balance(&sender).await?;
	println!("balance (unit) {balance}");
	println!("balance {}", unit::from_unit(balance));
	println!("package {pkg}");
	println!("arguments admin_role={admin_role} writer_role={writer_role} account={account}");

	let call = call::build_add_writer(pkg, &sender, admin_role, writer_role, account, balance)?;
	submit::submit_and_confirm(rpc, &call, &keypair).await?;

	let writer = rpc.get_object(writer_role).await?;
	println!("writer role {}", serde_json::to_string_pretty(&writer)?);

	Ok(())
}
