use base64::prelude::BASE64_STANDARD;
use base64::Engine;

use crate::call::CallSpec;
use crate::error::Error;
use crate::keys::{Keypair, ED25519_FLAG};
use crate::rpc::RpcClient;
use crate::types::SubmissionResult;

/// Sign `call`, submit it once, and block until the node can serve the
/// transaction by digest.
///
/// Exactly one signed transaction goes over the wire; nothing here
/// resubmits. An `ExecutionFailure` is a definitive on-chain failure
/// (the full result is dumped first for offline debugging); a
/// `Confirmation` error means the outcome is unknown and the caller
/// must re-query by digest.
pub async fn submit_and_confirm(
	rpc: &RpcClient,
	call: &CallSpec,
	keypair: &Keypair,
) -> Result<SubmissionResult, Error> {
	let payload = call.to_signing_bytes();
	let tx_bytes = BASE64_STANDARD.encode(&payload);
	let signature = serialize_signature(keypair, &payload);

	let result = rpc.execute(&tx_bytes, &signature).await?;
	println!("tx digest {}", result.digest);

	if !result.is_success() {
		println!("{}", serde_json::to_string_pretty(&result).unwrap());
		return Err(Error::ExecutionFailure {
			digest: result.digest.clone(),
			message: result.error_message(),
		});
	}

	rpc.wait_for_transaction(&result.digest).await?;
	Ok(result)
}

/// Serialized signature in the node's expected layout: scheme flag, the
/// 64-byte signature, then the 32-byte public key, base64 as one blob.
fn serialize_signature(keypair: &Keypair, message: &[u8]) -> String {
	let sig = keypair.sign(message);

	let mut out = Vec::with_capacity(1 + sig.len() + 32);
	out.push(ED25519_FLAG);
	out.extend_from_slice(&sig);
	out.extend_from_slice(&keypair.public_key());
	BASE64_STANDARD.encode(out)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::keys::SECRET_KEY_LEN;

	#[test]
	fn signature_blob_layout() {
		let keypair = Keypair::from_secret_bytes(&[7u8; SECRET_KEY_LEN]).unwrap();
		let encoded = serialize_signature(&keypair, b"payload");

		let raw = BASE64_STANDARD.decode(encoded).unwrap();
		assert_eq!(raw.len(), 1 + 64 + 32);
		assert_eq!(raw[0], ED25519_FLAG);
		assert_eq!(&raw[65..], keypair.public_key());
	}

	#[test]
	fn signature_blob_verifies() {
		use ed25519_dalek::{Signature, Verifier, VerifyingKey};

		let keypair = Keypair::from_secret_bytes(&[9u8; SECRET_KEY_LEN]).unwrap();
		let message = b"call bytes";
		let raw = BASE64_STANDARD
			.decode(serialize_signature(&keypair, message))
			.unwrap();

		let sig_bytes: [u8; 64] = raw[1..65].try_into().unwrap();
		let verifying = VerifyingKey::from_bytes(&keypair.public_key()).unwrap();
		assert!(verifying
			.verify(message, &Signature::from_bytes(&sig_bytes))
			.is_ok());
	}
}
