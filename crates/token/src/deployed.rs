use crate::{cache::ConstantCache, outputs::Outputs, Rpc, Slot, TokenError, TokenSummary};
use abi::{ContractMethod, DynSolValue, Erc20ContractAbi};
use alloy_primitives::{Address, Bytes, U256};
use alloy_rpc_types_eth::BlockId;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// An ERC-20 token deployed at a fixed address.
///
/// Balance and allowance reads always go to the node. The four token
/// constants (`name`, `symbol`, `decimals`, `totalSupply`) are fetched on
/// first use and kept until [`flush`](Self::flush). A failed fetch leaves
/// its slot unset, so the next read retries.
///
/// The cache lock is never held across an RPC call. Concurrent first reads
/// of the same constant may each reach the node, but the slot is written
/// once and every caller sees that value. A fetch that straddles a
/// [`flush`](Self::flush) returns its result without caching it.
#[derive(Debug)]
pub struct DeployedToken<R> {
    address: Address,
    abi: Arc<Erc20ContractAbi>,
    rpc: R,
    cache: Mutex<ConstantCache>,
}

impl<R> DeployedToken<R>
where
    R: Rpc,
{
    pub fn new(address: Address, abi: Arc<Erc20ContractAbi>, rpc: R) -> Self {
        Self {
            address,
            abi,
            rpc,
            cache: Mutex::new(ConstantCache::default()),
        }
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub const fn abi(&self) -> &Arc<Erc20ContractAbi> {
        &self.abi
    }

    /// Encode `method`, call it at `scope` and validate the result set.
    async fn read<'a>(
        &self,
        method: &'a ContractMethod,
        args: &[DynSolValue],
        scope: BlockId,
    ) -> Result<Outputs<'a>, TokenError> {
        let calldata = method.encode_call(args)?;

        let values = self
            .rpc
            .call(self.address, method, calldata, scope)
            .await
            .map_err(|source| {
                warn!(
                    token = %self.address,
                    method = method.name(),
                    error = %source,
                    "Token call failed"
                );
                TokenError::Rpc {
                    method: method.signature(),
                    source,
                }
            })?;

        Outputs::validate(method, values)
    }

    /// Return a cached constant, fetching it on a miss.
    async fn constant<T, S, F>(
        &self,
        method: &ContractMethod,
        slot: S,
        extract: F,
    ) -> Result<T, TokenError>
    where
        T: Clone,
        S: Fn(&mut ConstantCache) -> &mut Slot<T>,
        F: FnOnce(&Outputs<'_>) -> Result<T, TokenError>,
    {
        let generation = {
            let mut cache = self.cache.lock().await;
            if let Some(value) = slot(&mut cache).get() {
                debug!(token = %self.address, method = method.name(), "Constant cache hit");
                return Ok(value);
            }
            cache.generation()
        };

        debug!(token = %self.address, method = method.name(), "Constant cache miss, fetching");
        let outputs = self.read(method, &[], BlockId::latest()).await?;
        let value = extract(&outputs)?;

        let mut cache = self.cache.lock().await;
        if cache.generation() != generation {
            debug!(
                token = %self.address,
                method = method.name(),
                "Flushed during fetch, not caching"
            );
            return Ok(value);
        }
        Ok(slot(&mut cache).fill(value))
    }

    /// Token balance of `holder` at the latest block, in base units.
    pub async fn balance_of(&self, holder: Address) -> Result<U256, TokenError> {
        self.balance_of_at(holder, BlockId::latest()).await
    }

    /// Token balance of `holder` at `scope`, in base units. Never cached.
    pub async fn balance_of_at(&self, holder: Address, scope: BlockId) -> Result<U256, TokenError> {
        debug!(token = %self.address, holder = %holder, "Querying balance");

        let outputs = self
            .read(self.abi.balance_of(), &[DynSolValue::Address(holder)], scope)
            .await?;
        outputs.uint(0)
    }

    /// Amount `spender` may still move on behalf of `owner`, at the latest block.
    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, TokenError> {
        self.allowance_at(owner, spender, BlockId::latest()).await
    }

    pub async fn allowance_at(
        &self,
        owner: Address,
        spender: Address,
        scope: BlockId,
    ) -> Result<U256, TokenError> {
        debug!(token = %self.address, owner = %owner, spender = %spender, "Querying allowance");

        let outputs = self
            .read(
                self.abi.allowance(),
                &[DynSolValue::Address(owner), DynSolValue::Address(spender)],
                scope,
            )
            .await?;
        outputs.uint(0)
    }

    pub async fn name(&self) -> Result<String, TokenError> {
        self.constant(self.abi.name(), |c| &mut c.name, |o| o.string(0))
            .await
    }

    pub async fn symbol(&self) -> Result<String, TokenError> {
        self.constant(self.abi.symbol(), |c| &mut c.symbol, |o| o.string(0))
            .await
    }

    pub async fn decimals(&self) -> Result<u8, TokenError> {
        self.constant(
            self.abi.decimals(),
            |c| &mut c.decimals,
            |o| {
                let raw = o.uint(0)?;
                u8::try_from(raw)
                    .map_err(|_| o.unexpected("uint8", format!("out of range value {}", raw)))
            },
        )
        .await
    }

    /// Total supply in base units.
    pub async fn total_supply(&self) -> Result<U256, TokenError> {
        self.constant(self.abi.total_supply(), |c| &mut c.total_supply, |o| o.uint(0))
            .await
    }

    /// Total supply scaled by the token's decimals.
    pub async fn total_supply_scaled(&self) -> Result<String, TokenError> {
        let supply = self.total_supply().await?;
        self.scaled(supply).await
    }

    /// Render a base-unit amount in human units using the token's decimals.
    pub async fn scaled(&self, amount: U256) -> Result<String, TokenError> {
        let decimals = self.decimals().await?;
        Ok(units::to_scaled(amount, decimals))
    }

    /// Parse a human amount into base units using the token's decimals.
    pub async fn base_units(&self, amount: &str) -> Result<U256, TokenError> {
        let decimals = self.decimals().await?;
        Ok(units::from_scaled(amount, decimals)?)
    }

    /// Calldata for `transfer(to, amount)`; `amount` is in base units.
    pub fn encode_transfer(&self, to: Address, amount: U256) -> Result<Bytes, TokenError> {
        Ok(self.abi.transfer().encode_call(&[
            DynSolValue::Address(to),
            DynSolValue::Uint(amount, 256),
        ])?)
    }

    /// Calldata for `transferFrom(from, to, amount)`; `amount` is in base units.
    pub fn encode_transfer_from(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<Bytes, TokenError> {
        Ok(self.abi.transfer_from().encode_call(&[
            DynSolValue::Address(from),
            DynSolValue::Address(to),
            DynSolValue::Uint(amount, 256),
        ])?)
    }

    /// Calldata for `approve(spender, amount)`; `amount` is in base units.
    pub fn encode_approve(&self, spender: Address, amount: U256) -> Result<Bytes, TokenError> {
        Ok(self.abi.approve().encode_call(&[
            DynSolValue::Address(spender),
            DynSolValue::Uint(amount, 256),
        ])?)
    }

    /// Fetch all four constants, stopping at the first failure.
    pub async fn load_constants(&self) -> Result<(), TokenError> {
        self.name().await?;
        self.symbol().await?;
        self.decimals().await?;
        self.total_supply().await?;
        Ok(())
    }

    /// Forget all cached constants.
    pub async fn flush(&self) {
        self.cache.lock().await.clear();
        debug!(token = %self.address, "Constant cache flushed");
    }

    /// Snapshot of the cached constants. Never fetches.
    pub async fn summary(&self) -> TokenSummary {
        let cache = self.cache.lock().await;
        TokenSummary {
            address: self.address,
            name: cache.name.get(),
            symbol: cache.symbol.get(),
            decimals: cache.decimals.get(),
            total_supply: cache.total_supply.get(),
        }
    }
}
