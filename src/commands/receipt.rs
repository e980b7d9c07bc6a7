use anyhow::Result;

use crate::call::{self, ReceiptData, RECEIPT_TYPE_SUFFIX};
use crate::cli::{Cli, ReceiptCommand};
use crate::commands::{open_keypair, resolve_rpc};
use crate::config::Config;
use crate::rpc::RpcClient;
use crate::submit;
use crate::unit;

pub async fn run(cli: &Cli, cmd: &ReceiptCommand) -> Result<()> {
	let config = Config::load()?;
	let rpc = resolve_rpc(cli, &config);

	match cmd {
		ReceiptCommand::Add {
			priv_key,
			pkg,
			writer_role,
			recipient,
			transfer_tx,
			ver,
			timestamp,
			meta_data_uri,
		} => {
			// An omitted timestamp means "now", resolved here so the call
			// builder stays deterministic.
			let timestamp = (*timestamp)
				.unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as u64);

			let data = ReceiptData {
				writer_role,
				recipient,
				transfer_tx,
				ver,
				timestamp,
				meta_data_uri,
			};
			add_receipt(&rpc, priv_key, pkg, &data).await
		}
	}
}

/// Full pipeline for one receipt: decode key, derive address, query
/// balance, build the call, submit, confirm, extract the created object.
async fn add_receipt(
	rpc: &RpcClient,
	priv_key: &str,
	pkg: &str,
	data: &ReceiptData<'_>,
) -> Result<()> {
	let keypair = open_keypair(priv_key)?;
	let sender = keypair.address();

	let balance = rpc.get_balance(&sender).await?;
	println!("balance (unit) {balance}");
	println!("balance {}", unit::from_unit(balance));
	println!("package {pkg}");
	println!("receipt data {data:?}");

	let call = call::build_add_receipt(pkg, &sender, data, balance)?;
	let result = submit::submit_and_confirm(rpc, &call, &keypair).await?;

	match result.find_created(RECEIPT_TYPE_SUFFIX) {
		Some(obj) => println!("created receipt {} ({})", obj.object_id, obj.object_type),
		None => println!("no created receipt reported"),
	}

	Ok(())
}
