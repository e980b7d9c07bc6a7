use bech32::{FromBase32, ToBase32, Variant};
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use ed25519_dalek::{Signer as _, SigningKey};

use crate::error::Error;

type Blake2b256 = Blake2b<U32>;

/// Human-readable part of an encoded Sui secret key.
pub const SECRET_KEY_HRP: &str = "suiprivkey";

/// Signature-scheme flag for ed25519. It prefixes both the encoded
/// secret key and the address hash preimage.
pub const ED25519_FLAG: u8 = 0x00;

pub const SECRET_KEY_LEN: usize = 32;

// -- KeyMaterial codec --

/// Decode a `suiprivkey1...` string into raw signing-key bytes.
///
/// The bech32 payload is one scheme-flag byte followed by the 32-byte
/// secret. The flag is stripped; only the key material is returned.
pub fn decode_secret_key(encoded: &str) -> Result<[u8; SECRET_KEY_LEN], Error> {
	let (hrp, words, variant) = bech32::decode(encoded)
		.map_err(|e| Error::Decode(format!("bech32 decode failed: {e}")))?;
	if hrp != SECRET_KEY_HRP {
		return Err(Error::Decode(format!(
			"unexpected prefix {hrp:?}, want {SECRET_KEY_HRP:?}"
		)));
	}
	if variant != Variant::Bech32 {
		return Err(Error::Decode("unexpected bech32 variant".into()));
	}

	let bytes = Vec::<u8>::from_base32(&words)
		.map_err(|e| Error::Decode(format!("invalid 5-bit packing: {e}")))?;

	match bytes.split_first() {
		Some((&ED25519_FLAG, key)) if key.len() == SECRET_KEY_LEN => {
			let mut out = [0u8; SECRET_KEY_LEN];
			out.copy_from_slice(key);
			Ok(out)
		}
		Some((&flag, _)) if flag != ED25519_FLAG => Err(Error::Decode(format!(
			"unsupported scheme flag {flag:#04x}"
		))),
		_ => Err(Error::Decode(format!(
			"decoded to {} bytes, want scheme flag plus {SECRET_KEY_LEN}",
			bytes.len()
		))),
	}
}

/// Encode raw signing-key bytes back to the `suiprivkey1...` form.
pub fn encode_secret_key(secret: &[u8; SECRET_KEY_LEN]) -> String {
	let mut payload = Vec::with_capacity(1 + SECRET_KEY_LEN);
	payload.push(ED25519_FLAG);
	payload.extend_from_slice(secret);
	bech32::encode(SECRET_KEY_HRP, payload.to_base32(), Variant::Bech32)
		.expect("static hrp is valid")
}

// -- Identity --

/// An ed25519 keypair held for the duration of one invocation.
/// The secret is never persisted, logged, or cloned out.
pub struct Keypair {
	signing: SigningKey,
}

impl Keypair {
	pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self, Error> {
		let secret: [u8; SECRET_KEY_LEN] = bytes.try_into().map_err(|_| {
			Error::InvalidKey(format!(
				"expected {SECRET_KEY_LEN} key bytes, got {}",
				bytes.len()
			))
		})?;
		Ok(Self {
			signing: SigningKey::from_bytes(&secret),
		})
	}

	pub fn from_encoded(encoded: &str) -> Result<Self, Error> {
		let secret = decode_secret_key(encoded)?;
		Self::from_secret_bytes(&secret)
	}

	pub fn public_key(&self) -> [u8; 32] {
		self.signing.verifying_key().to_bytes()
	}

	/// Canonical address: `0x` + hex of Blake2b-256 over the scheme flag
	/// followed by the public key. Deterministic for a given secret.
	pub fn address(&self) -> String {
		let mut hasher = Blake2b256::new();
		hasher.update([ED25519_FLAG]);
		hasher.update(self.public_key());
		format!("0x{}", hex::encode(hasher.finalize()))
	}

	pub fn sign(&self, message: &[u8]) -> [u8; 64] {
		self.signing.sign(message).to_bytes()
	}
}
