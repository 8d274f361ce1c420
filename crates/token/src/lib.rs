//! Live handles to deployed ERC-20 tokens.
//!
//! This crate binds the shared [`Erc20ContractAbi`] to a contract address and
//! an [`Rpc`] capability:
//! - [`DeployedToken`]: balance/allowance reads, cached constants, calldata encoding
//! - [`Erc20`]: factory sharing one ABI table across many tokens
//! - [`TokenSummary`]: snapshot of cached constants

mod cache;
mod deployed;
mod error;
mod outputs;
mod summary;

pub use abi::{ContractMethod, DynSolValue, Erc20ContractAbi};
pub use alloy_rpc_types_eth::BlockId;
pub use cache::{ConstantCache, Slot};
pub use deployed::DeployedToken;
pub use error::{RpcError, TokenError};
pub use summary::TokenSummary;

use alloy_primitives::{Address, Bytes};
use std::{future::Future, sync::Arc};

/// Capability to execute read-only contract calls.
///
/// Implementations submit `calldata` to `contract` at `scope` and decode the
/// return data according to `method`'s declared outputs. Timeouts and
/// retries belong to the implementation; callers treat any error as final.
pub trait Rpc: Send + Sync {
    fn call(
        &self,
        contract: Address,
        method: &ContractMethod,
        calldata: Bytes,
        scope: BlockId,
    ) -> impl Future<Output = Result<Vec<DynSolValue>, RpcError>> + Send;
}

impl<R: Rpc> Rpc for Arc<R> {
    fn call(
        &self,
        contract: Address,
        method: &ContractMethod,
        calldata: Bytes,
        scope: BlockId,
    ) -> impl Future<Output = Result<Vec<DynSolValue>, RpcError>> + Send {
        (**self).call(contract, method, calldata, scope)
    }
}

/// Factory for [`DeployedToken`] handles sharing one ABI table.
#[derive(Debug, Clone)]
pub struct Erc20<R> {
    rpc: R,
    abi: Arc<Erc20ContractAbi>,
}

impl<R> Erc20<R>
where
    R: Rpc + Clone,
{
    pub fn new(rpc: R) -> Result<Self, TokenError> {
        Ok(Self::with_abi(rpc, Arc::new(Erc20ContractAbi::new()?)))
    }

    pub const fn with_abi(rpc: R, abi: Arc<Erc20ContractAbi>) -> Self {
        Self { rpc, abi }
    }

    pub const fn abi(&self) -> &Arc<Erc20ContractAbi> {
        &self.abi
    }

    pub fn deployed_at(&self, address: Address) -> DeployedToken<R> {
        DeployedToken::new(address, Arc::clone(&self.abi), self.rpc.clone())
    }
}
