use std::time::Duration;

use serde_json::{json, Value};

use crate::error::Error;
use crate::types::SubmissionResult;

/// Thin JSON-RPC client for a Sui fullnode.
///
/// Only the handful of calls the pipeline needs are wrapped, all as raw
/// JSON-RPC over HTTP: the node's surface is consumed as an opaque
/// service, never reimplemented. Every call is a single attempt; there
/// is no retry anywhere in this client.
pub struct RpcClient {
	url: String,
	http: reqwest::Client,
}

impl RpcClient {
	pub fn new(url: &str) -> Self {
		Self {
			url: url.to_owned(),
			http: reqwest::Client::new(),
		}
	}

	/// Issue one JSON-RPC call and unwrap the `result` field.
	async fn call(&self, method: &str, params: Value) -> Result<Value, Error> {
		let body = json!({
			"id": 1,
			"jsonrpc": "2.0",
			"method": method,
			"params": params,
		});

		let resp: Value = self
			.http
			.post(&self.url)
			.json(&body)
			.send()
			.await?
			.json()
			.await?;

		resp.get("result").cloned().ok_or_else(|| {
			let err = resp.get("error").cloned().unwrap_or(Value::Null);
			Error::Network(format!("{method} RPC error: {err}"))
		})
	}

	/// Total balance of `owner` in base units (MIST). At-most-once: any
	/// transport or shape failure propagates immediately.
	pub async fn get_balance(&self, owner: &str) -> Result<u64, Error> {
		let result = self.call("suix_getBalance", json!([owner])).await?;

		let total = result
			.get("totalBalance")
			.and_then(Value::as_str)
			.ok_or_else(|| Error::Network("getBalance response missing totalBalance".into()))?;

		total
			.parse()
			.map_err(|e| Error::Network(format!("malformed totalBalance {total:?}: {e}")))
	}

	/// Submit a signed call with effects and object-change reporting
	/// enabled, blocking until the node returns digest and effects.
	pub async fn execute(&self, tx_bytes: &str, signature: &str) -> Result<SubmissionResult, Error> {
		let result = self
			.call(
				"sui_executeTransactionBlock",
				json!([
					tx_bytes,
					[signature],
					{ "showEffects": true, "showObjectChanges": true },
				]),
			)
			.await?;

		serde_json::from_value(result)
			.map_err(|e| Error::Network(format!("malformed execution response: {e}")))
	}

	/// Block until the node can serve the transaction by digest.
	///
	/// The node answers with a JSON-RPC error until the digest is
	/// servable, so error responses mean "keep polling"; only transport
	/// failures abort. No client-side deadline: a hang here blocks the
	/// invocation, by contract.
	pub async fn wait_for_transaction(&self, digest: &str) -> Result<(), Error> {
		let body = json!({
			"id": 1,
			"jsonrpc": "2.0",
			"method": "sui_getTransactionBlock",
			"params": [digest, {}],
		});

		loop {
			let resp: Value = self
				.http
				.post(&self.url)
				.json(&body)
				.send()
				.await
				.map_err(|e| Error::Confirmation(e.to_string()))?
				.json()
				.await
				.map_err(|e| Error::Confirmation(e.to_string()))?;

			if resp.get("result").is_some() {
				return Ok(());
			}

			tokio::time::sleep(Duration::from_secs(1)).await;
		}
	}

	/// Ask the faucet to fund `recipient`. The faucet is plain HTTP, not
	/// JSON-RPC, and lives on its own host.
	pub async fn request_faucet(&self, faucet_url: &str, recipient: &str) -> Result<(), Error> {
		let body = json!({ "FixedAmountRequest": { "recipient": recipient } });

		let resp = self.http.post(faucet_url).json(&body).send().await?;
		if !resp.status().is_success() {
			let status = resp.status();
			let text = resp.text().await.unwrap_or_default();
			return Err(Error::Network(format!("faucet returned {status}: {text}")));
		}
		Ok(())
	}

	/// Fetch an object with its content included.
	pub async fn get_object(&self, id: &str) -> Result<Value, Error> {
		self.call("sui_getObject", json!([id, { "showContent": true }]))
			.await
	}
}
