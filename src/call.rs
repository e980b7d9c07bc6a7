use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Move module that owns both entry functions.
pub const RECEIPT_MODULE: &str = "reward_receipt";

/// Type suffix of the object created by a successful add_receipt call.
pub const RECEIPT_TYPE_SUFFIX: &str = "::reward_receipt::RewardReceipt";

/// Share of the signer's balance allotted to gas: 1%, truncated.
const GAS_BUDGET_DIVISOR: u64 = 100;

/// One positional call argument, tagged with its declared type.
/// The closed set makes an untagged or mistyped argument unrepresentable
/// past construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum CallArg {
	/// Reference to an on-chain object, by ID.
	Object(String),
	Address(String),
	Str(String),
	U64(u64),
}

impl CallArg {
	pub fn object(id: &str) -> Result<Self, Error> {
		validate_id(id, "object id")?;
		Ok(Self::Object(id.to_owned()))
	}

	pub fn address(addr: &str) -> Result<Self, Error> {
		validate_id(addr, "address")?;
		Ok(Self::Address(addr.to_owned()))
	}
}

/// A single contract invocation, assembled and ready to sign.
///
/// The gas budget is always computed from the signer's balance at build
/// time; there is no way to set it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallSpec {
	pub package: String,
	pub module: String,
	pub function: String,
	pub sender: String,
	pub args: Vec<CallArg>,
	pub gas_budget: u64,
}

impl CallSpec {
	pub fn new(
		package: &str,
		module: &str,
		function: &str,
		sender: &str,
		args: Vec<CallArg>,
		balance: u64,
	) -> Result<Self, Error> {
		validate_id(package, "package id")?;
		let gas_budget = compute_gas_budget(balance)?;
		Ok(Self {
			package: package.to_owned(),
			module: module.to_owned(),
			function: function.to_owned(),
			sender: sender.to_owned(),
			args,
			gas_budget,
		})
	}

	/// Fully qualified call target: `package::module::function`.
	pub fn target(&self) -> String {
		format!("{}::{}::{}", self.package, self.module, self.function)
	}

	/// Canonical byte form of the call, signed as-is and submitted as-is.
	pub fn to_signing_bytes(&self) -> Vec<u8> {
		serde_json::to_vec(self).unwrap()
	}
}

/// Gas budget = floor(balance * 0.01). Bounds worst-case spend to 1% of
/// current funds without a simulation step; a high-cost call can still
/// fail at submission, which the submitter surfaces rather than retries.
pub fn compute_gas_budget(balance: u64) -> Result<u64, Error> {
	let budget = balance / GAS_BUDGET_DIVISOR;
	if budget == 0 {
		return Err(Error::InsufficientBalance { balance });
	}
	Ok(budget)
}

// -- Domain call builders --

/// Everything add_receipt needs besides the package and signer. The
/// timestamp is explicit; "now" is resolved by the caller, never here.
#[derive(Debug, Clone)]
pub struct ReceiptData<'a> {
	pub writer_role: &'a str,
	pub recipient: &'a str,
	pub transfer_tx: &'a str,
	pub ver: &'a str,
	pub timestamp: u64,
	pub meta_data_uri: &'a str,
}

/// Build the add_receipt call: `pkg::reward_receipt::add_receipt`.
pub fn build_add_receipt(
	package: &str,
	sender: &str,
	data: &ReceiptData<'_>,
	balance: u64,
) -> Result<CallSpec, Error> {
	let args = vec![
		CallArg::object(data.writer_role)?,
		CallArg::address(data.recipient)?,
		CallArg::Str(data.transfer_tx.to_owned()),
		CallArg::Str(data.ver.to_owned()),
		CallArg::U64(data.timestamp),
		CallArg::Str(data.meta_data_uri.to_owned()),
	];
	CallSpec::new(package, RECEIPT_MODULE, "add_receipt", sender, args, balance)
}

/// Build the add_writer call: `pkg::reward_receipt::add_writer`.
pub fn build_add_writer(
	package: &str,
	sender: &str,
	admin_role: &str,
	writer_role: &str,
	account: &str,
	balance: u64,
) -> Result<CallSpec, Error> {
	let args = vec![
		CallArg::object(admin_role)?,
		CallArg::object(writer_role)?,
		CallArg::address(account)?,
	];
	CallSpec::new(package, RECEIPT_MODULE, "add_writer", sender, args, balance)
}

// -- Helpers --

fn validate_id(s: &str, what: &str) -> Result<(), Error> {
	let hex_part = s
		.strip_prefix("0x")
		.ok_or_else(|| Error::ArgumentType(format!("{what} {s:?} is missing the 0x prefix")))?;
	if hex_part.is_empty() || hex_part.len() > 64 {
		return Err(Error::ArgumentType(format!(
			"{what} {s:?} must be 1 to 64 hex chars"
		)));
	}
	if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err(Error::ArgumentType(format!(
			"{what} {s:?} contains non-hex characters"
		)));
	}
	Ok(())
}
