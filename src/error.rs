use thiserror::Error;

/// Everything that can abort a pipeline run. None of these are recovered
/// locally; each one propagates to `main` and terminates the invocation.
#[derive(Debug, Error)]
pub enum Error {
	/// The encoded secret key string could not be decoded.
	#[error("malformed secret key encoding: {0}")]
	Decode(String),

	/// Decoded key bytes were rejected by the signature scheme.
	#[error("invalid key material: {0}")]
	InvalidKey(String),

	/// The node (or faucet) was unreachable or answered with garbage.
	#[error("node RPC failure: {0}")]
	Network(String),

	/// The signer's balance is too small to fund any gas budget.
	#[error("balance {balance} MIST is below the minimum needed to fund a gas budget")]
	InsufficientBalance { balance: u64 },

	/// A call argument did not fit its declared position type.
	#[error("mistyped call argument: {0}")]
	ArgumentType(String),

	/// The node executed the transaction and reported it failed.
	#[error("transaction {digest} failed on-chain: {message}")]
	ExecutionFailure { digest: String, message: String },

	/// The confirmation wait failed after submission. The transaction may
	/// still have finalized; the caller must re-query by digest.
	#[error("confirmation wait failed: {0}; on-chain outcome is UNKNOWN, re-query by digest")]
	Confirmation(String),
}

impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Self {
		Error::Network(err.to_string())
	}
}
