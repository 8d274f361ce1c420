//! JSON-RPC transport for token reads.

use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use thiserror::Error;
use token::{BlockId, ContractMethod, DynSolValue, Rpc, RpcError};
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Error parsing or validating URLs
    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Error connecting to the RPC endpoint
    #[error("Connection error: {0}")]
    Connection(String),
}

/// Convenience function to create an ethereum rpc provider from url.
pub async fn create_provider(rpc_url: &str) -> Result<impl Provider + Clone, ClientError> {
    let url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{}", e)))?;
    let provider = ProviderBuilder::new().connect_http(url);

    Ok(provider)
}

/// Create an [`Rpc`] capability backed by an HTTP provider.
pub async fn create_rpc(rpc_url: &str) -> Result<ProviderRpc<impl Provider + Clone>, ClientError> {
    let provider = create_provider(rpc_url).await?;
    Ok(ProviderRpc::new(provider))
}

/// [`Rpc`] implementation issuing `eth_call` through an alloy provider.
#[derive(Debug, Clone)]
pub struct ProviderRpc<P> {
    provider: P,
}

impl<P> ProviderRpc<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Chain id reported by the node.
    pub async fn chain_id(&self) -> Result<u64, ClientError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))
    }
}

impl<P> Rpc for ProviderRpc<P>
where
    P: Provider + Clone,
{
    async fn call(
        &self,
        contract: Address,
        method: &ContractMethod,
        calldata: Bytes,
        scope: BlockId,
    ) -> Result<Vec<DynSolValue>, RpcError> {
        debug!(contract = %contract, method = method.name(), "eth_call");

        let tx = TransactionRequest::default()
            .with_to(contract)
            .with_input(calldata);

        let raw = self
            .provider
            .call(tx)
            .block(scope)
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        // Calls to accounts without code return no data at all.
        if raw.is_empty() {
            return Ok(Vec::new());
        }

        method
            .decode_output(&raw)
            .map_err(|e| RpcError::Decode(e.to_string()))
    }
}
