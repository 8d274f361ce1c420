pub mod config;

use ::config::NetworkConfig;
use alloy_primitives::{Address, U256};
use serde::Serialize;
use token::{BlockId, DeployedToken, Rpc, TokenSummary};
use tracing::{info, warn};

/// Resolve a token argument given either as a hex address or as a symbol
/// from the network's token table.
pub fn resolve_token(network: &NetworkConfig, token: &str) -> eyre::Result<Address> {
    if let Ok(address) = token.parse::<Address>() {
        return Ok(address);
    }

    network
        .token(token)
        .map(|t| t.address)
        .ok_or_else(|| eyre::eyre!("unknown token '{}' on {:?}", token, network.network_type))
}

/// Block scope for an optional block number, defaulting to latest.
pub fn block_scope(block: Option<u64>) -> BlockId {
    block.map_or_else(BlockId::latest, BlockId::number)
}

/// Scaled amount as reported by the CLI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountReport {
    pub token: Address,
    pub symbol: String,
    #[serde(serialize_with = "serialize_decimal")]
    pub raw: U256,
    pub scaled: String,
}

fn serialize_decimal<S: serde::Serializer>(value: &U256, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

impl std::fmt::Display for AmountReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({} base units)", self.scaled, self.symbol, self.raw)
    }
}

/// Fetch all token constants and compare decimals with the preset, if any.
pub async fn inspect_token<R: Rpc>(
    token: &DeployedToken<R>,
    network: &NetworkConfig,
) -> eyre::Result<TokenSummary> {
    token.load_constants().await?;
    let summary = token.summary().await;

    if let (Some(known), Some(decimals)) = (network.token_at(token.address()), summary.decimals) {
        if known.decimals != decimals {
            warn!(
                token = %token.address(),
                expected = known.decimals,
                found = decimals,
                "Decimals differ from preset"
            );
        }
    }

    info!(token = %token.address(), symbol = ?summary.symbol, "Loaded token constants");
    Ok(summary)
}

pub async fn check_balance<R: Rpc>(
    token: &DeployedToken<R>,
    holder: Address,
    scope: BlockId,
) -> eyre::Result<AmountReport> {
    let raw = token.balance_of_at(holder, scope).await?;
    report(token, raw).await
}

pub async fn check_allowance<R: Rpc>(
    token: &DeployedToken<R>,
    owner: Address,
    spender: Address,
    scope: BlockId,
) -> eyre::Result<AmountReport> {
    let raw = token.allowance_at(owner, spender, scope).await?;
    report(token, raw).await
}

async fn report<R: Rpc>(token: &DeployedToken<R>, raw: U256) -> eyre::Result<AmountReport> {
    let decimals = token.decimals().await?;
    let symbol = token.symbol().await?;

    Ok(AmountReport {
        token: token.address(),
        symbol,
        raw,
        scaled: units::to_scaled(raw, decimals),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, Bytes};
    use std::{collections::HashMap, sync::Arc};
    use token::{ContractMethod, DynSolValue, Erc20, RpcError};

    #[derive(Debug, Clone, Default)]
    struct FixedRpc {
        values: Arc<HashMap<&'static str, Vec<DynSolValue>>>,
    }

    impl FixedRpc {
        fn usdc_like() -> Self {
            let values = HashMap::from([
                ("name", vec![DynSolValue::String("USD Coin".into())]),
                ("symbol", vec![DynSolValue::String("USDC".into())]),
                ("decimals", vec![DynSolValue::Uint(U256::from(6), 8)]),
                (
                    "totalSupply",
                    vec![DynSolValue::Uint(U256::from(10u64.pow(12)), 256)],
                ),
                (
                    "balanceOf",
                    vec![DynSolValue::Uint(U256::from(1_234_500), 256)],
                ),
                ("allowance", vec![DynSolValue::Uint(U256::ZERO, 256)]),
            ]);
            Self {
                values: Arc::new(values),
            }
        }
    }

    impl Rpc for FixedRpc {
        async fn call(
            &self,
            _contract: Address,
            method: &ContractMethod,
            _calldata: Bytes,
            _scope: BlockId,
        ) -> Result<Vec<DynSolValue>, RpcError> {
            self.values
                .get(method.name())
                .cloned()
                .ok_or_else(|| RpcError::Transport("unscripted".into()))
        }
    }

    const USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

    #[test]
    fn test_resolve_token() {
        let network = NetworkConfig::mainnet();

        assert_eq!(resolve_token(&network, "usdc").unwrap(), USDC);
        assert_eq!(
            resolve_token(&network, "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").unwrap(),
            USDC
        );
        assert!(resolve_token(&network, "NOPE").is_err());
    }

    #[test]
    fn test_block_scope() {
        assert_eq!(block_scope(None), BlockId::latest());
        assert_eq!(block_scope(Some(19_000_000)), BlockId::number(19_000_000));
    }

    #[tokio::test]
    async fn test_inspect_and_balance() {
        let erc20 = Erc20::new(FixedRpc::usdc_like()).unwrap();
        let token = erc20.deployed_at(USDC);
        let network = NetworkConfig::mainnet();

        let summary = inspect_token(&token, &network).await.unwrap();
        assert_eq!(summary.symbol.as_deref(), Some("USDC"));
        assert_eq!(summary.decimals, Some(6));

        let holder = address!("1111111111111111111111111111111111111111");
        let balance = check_balance(&token, holder, BlockId::latest())
            .await
            .unwrap();
        assert_eq!(balance.scaled, "1.234500");
        assert_eq!(balance.to_string(), "1.234500 USDC (1234500 base units)");

        let json = serde_json::to_value(&balance).unwrap();
        assert_eq!(json["raw"], "1234500");

        let allowance = check_allowance(&token, holder, USDC, BlockId::latest())
            .await
            .unwrap();
        assert_eq!(allowance.scaled, "0.000000");
    }
}
