//! Contract ABI metadata.
//!
//! This crate describes contract interfaces at runtime:
//! - Typed parameters ([`AbiParam`])
//! - Functions and constructors ([`ContractMethod`]) with call encoding
//! - Events ([`ContractEvent`]) with topic derivation
//! - An immutable registry ([`ContractAbi`]) and the ERC-20 table ([`Erc20ContractAbi`])
//!
//! Word packing and hashing are delegated to `alloy-dyn-abi` and `alloy-primitives`.

mod contract;
mod erc20;
mod error;
mod event;
mod method;
mod param;

pub use alloy_dyn_abi::{DynSolType, DynSolValue};
pub use contract::{ContractAbi, ContractAbiBuilder};
pub use erc20::Erc20ContractAbi;
pub use error::AbiError;
pub use event::{ContractEvent, MAX_INDEXED_INPUTS, MAX_INDEXED_INPUTS_ANONYMOUS};
pub use method::{ContractMethod, MethodKind};
pub use param::AbiParam;
