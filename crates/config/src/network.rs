//! Network presets.
//!
//! Provides chain ids and well-known ERC-20 token addresses for each
//! supported network.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// Network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Mainnet,
    Sepolia,
}

/// A token whose address and decimals are known ahead of time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownToken {
    /// Ticker symbol, e.g. `USDC`
    pub symbol: String,
    /// Token contract address
    pub address: Address,
    /// Expected decimals
    pub decimals: u8,
}

impl KnownToken {
    pub fn new(symbol: impl Into<String>, address: Address, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            address,
            decimals,
        }
    }
}

/// Network configuration with its token table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network type
    pub network_type: NetworkType,
    /// Chain ID
    pub chain_id: u64,
    /// Well-known tokens
    pub tokens: Vec<KnownToken>,
}

impl NetworkConfig {
    /// Ethereum mainnet configuration.
    pub fn mainnet() -> Self {
        Self {
            network_type: NetworkType::Mainnet,
            chain_id: 1,
            tokens: vec![
                KnownToken::new(
                    "USDC",
                    address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
                    6,
                ),
                KnownToken::new(
                    "DAI",
                    address!("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
                    18,
                ),
                KnownToken::new(
                    "WETH",
                    address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
                    18,
                ),
                KnownToken::new(
                    "LINK",
                    address!("0x514910771AF9Ca656af840dff83E8264EcF986CA"),
                    18,
                ),
                KnownToken::new(
                    "UNI",
                    address!("0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984"),
                    18,
                ),
            ],
        }
    }

    /// Ethereum Sepolia testnet configuration.
    pub fn sepolia() -> Self {
        Self {
            network_type: NetworkType::Sepolia,
            chain_id: 11155111,
            tokens: vec![KnownToken::new(
                "WETH",
                address!("0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14"),
                18,
            )],
        }
    }

    /// Create configuration from network type.
    pub fn from_network_type(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Mainnet => Self::mainnet(),
            NetworkType::Sepolia => Self::sepolia(),
        }
    }

    /// Find a token by symbol, ignoring case.
    pub fn token(&self, symbol: &str) -> Option<&KnownToken> {
        self.tokens
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Find a token by address.
    pub fn token_at(&self, address: Address) -> Option<&KnownToken> {
        self.tokens.iter().find(|t| t.address == address)
    }
}

/// Builder for custom network configurations.
#[derive(Debug, Clone)]
pub struct NetworkConfigBuilder {
    config: NetworkConfig,
}

impl NetworkConfigBuilder {
    /// Start with mainnet defaults.
    pub fn mainnet() -> Self {
        Self {
            config: NetworkConfig::mainnet(),
        }
    }

    /// Start with testnet defaults.
    pub fn testnet() -> Self {
        Self {
            config: NetworkConfig::sepolia(),
        }
    }

    /// Start from the defaults of `network_type`.
    pub fn from_network_type(network_type: NetworkType) -> Self {
        Self {
            config: NetworkConfig::from_network_type(network_type),
        }
    }

    /// Add a token, replacing any existing entry with the same symbol.
    pub fn token(mut self, token: KnownToken) -> Self {
        self.config
            .tokens
            .retain(|t| !t.symbol.eq_ignore_ascii_case(&token.symbol));
        self.config.tokens.push(token);
        self
    }

    /// Override the chain id.
    pub const fn chain_id(mut self, chain_id: u64) -> Self {
        self.config.chain_id = chain_id;
        self
    }

    /// Build the network configuration.
    pub fn build(self) -> NetworkConfig {
        self.config
    }
}
