//! Configuration types for token tooling.
//!
//! This crate provides:
//! - Network presets (mainnet, Sepolia)
//! - Well-known token addresses and decimals per network
//! - A builder for custom token tables

pub mod network;

pub use network::{KnownToken, NetworkConfig, NetworkConfigBuilder, NetworkType};
