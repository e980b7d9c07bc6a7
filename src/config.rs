use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	pub network: NetworkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
	pub default: String,
	pub devnet_rpc: String,
	pub testnet_rpc: String,
	pub mainnet_rpc: String,
	pub localnet_rpc: String,
	pub devnet_faucet: String,
	pub testnet_faucet: String,
	pub localnet_faucet: String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			network: NetworkConfig {
				default: "devnet".into(),
				devnet_rpc: "https://fullnode.devnet.sui.io:443".into(),
				testnet_rpc: "https://fullnode.testnet.sui.io:443".into(),
				mainnet_rpc: "https://fullnode.mainnet.sui.io:443".into(),
				localnet_rpc: "http://127.0.0.1:9000".into(),
				devnet_faucet: "https://faucet.devnet.sui.io/gas".into(),
				testnet_faucet: "https://faucet.testnet.sui.io/gas".into(),
				localnet_faucet: "http://127.0.0.1:9123/gas".into(),
			},
		}
	}
}

impl Config {
	/// Directory where CLI state is stored (~/.sui-receipt/).
	pub fn dir() -> PathBuf {
		dirs::home_dir()
			.expect("could not determine home directory")
			.join(".sui-receipt")
	}

	/// Path to the config file.
	pub fn path() -> PathBuf {
		Self::dir().join("config.toml")
	}

	/// Load config from disk, falling back to defaults if no file exists.
	pub fn load() -> anyhow::Result<Self> {
		let path = Self::path();
		if path.exists() {
			let content = std::fs::read_to_string(&path)?;
			Ok(toml::from_str(&content)?)
		} else {
			Ok(Self::default())
		}
	}

	/// Persist the current config to disk, creating the directory if needed.
	pub fn save(&self) -> anyhow::Result<()> {
		let path = Self::path();
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&path, toml::to_string_pretty(self)?)?;
		Ok(())
	}

	/// Return the fullnode RPC URL for the given network name.
	pub fn rpc_url(&self, network: &str) -> &str {
		match network {
			"testnet" => &self.network.testnet_rpc,
			"mainnet" => &self.network.mainnet_rpc,
			"localnet" => &self.network.localnet_rpc,
			_ => &self.network.devnet_rpc,
		}
	}

	/// Return the faucet URL for the given network name. Mainnet has no
	/// faucet.
	pub fn faucet_url(&self, network: &str) -> Option<&str> {
		match network {
			"mainnet" => None,
			"testnet" => Some(&self.network.testnet_faucet),
			"localnet" => Some(&self.network.localnet_faucet),
			_ => Some(&self.network.devnet_faucet),
		}
	}
}
