use config::{KnownToken, NetworkConfig, NetworkConfigBuilder, NetworkType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level inspector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RPC endpoint url
    pub rpc_url: String,

    /// Network whose token table is used to resolve symbols
    #[serde(default = "default_network")]
    pub network: NetworkType,

    /// Extra tokens, overriding presets with the same symbol
    #[serde(default)]
    pub tokens: Vec<KnownToken>,
}

const fn default_network() -> NetworkType {
    NetworkType::Mainnet
}

impl Config {
    pub fn new(rpc_url: impl Into<String>, network: NetworkType) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            network,
            tokens: Vec::new(),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Network presets merged with the configured extra tokens.
    pub fn network_config(&self) -> NetworkConfig {
        self.tokens
            .iter()
            .cloned()
            .fold(
                NetworkConfigBuilder::from_network_type(self.network),
                NetworkConfigBuilder::token,
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_parse_minimal() {
        let config: Config = toml::from_str(r#"rpc_url = "https://eth.example""#).unwrap();
        assert_eq!(config.network, NetworkType::Mainnet);
        assert!(config.tokens.is_empty());
        assert_eq!(config.network_config().chain_id, 1);
    }

    #[test]
    fn test_extra_tokens_merge() {
        let config: Config = toml::from_str(
            r#"
            rpc_url = "https://sepolia.example"
            network = "sepolia"

            [[tokens]]
            symbol = "TST"
            address = "0x1111111111111111111111111111111111111111"
            decimals = 2
            "#,
        )
        .unwrap();

        let network = config.network_config();
        assert_eq!(network.network_type, NetworkType::Sepolia);
        assert!(network.token("WETH").is_some());
        assert_eq!(
            network.token("tst").unwrap().address,
            address!("1111111111111111111111111111111111111111")
        );
    }
}
