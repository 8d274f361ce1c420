//! The standard ERC-20 contract table.

use crate::{AbiError, AbiParam, ContractAbi, ContractEvent, ContractMethod};

/// Method and event descriptors of the ERC-20 standard.
///
/// Construct once and share behind an `Arc`; every deployed token reads
/// the same table.
#[derive(Debug, Clone)]
pub struct Erc20ContractAbi {
    contract: ContractAbi,
    name: usize,
    symbol: usize,
    decimals: usize,
    total_supply: usize,
    balance_of: usize,
    transfer: usize,
    transfer_from: usize,
    approve: usize,
    allowance: usize,
    transfer_event: usize,
    approval_event: usize,
}

impl Erc20ContractAbi {
    /// Assemble the ERC-20 table in standard order.
    ///
    /// Fails only if the table itself is malformed.
    pub fn new() -> Result<Self, AbiError> {
        let contract = ContractAbi::builder()
            // Constants
            .method(getter("name", "string")?)?
            .method(getter("symbol", "string")?)?
            .method(getter("decimals", "uint8")?)?
            .method(getter("totalSupply", "uint256")?)?
            // balanceOf(address)
            .method(
                ContractMethod::function("balanceOf", true, false)
                    .append_input(AbiParam::new("address")?)
                    .append_output(AbiParam::new("uint256")?),
            )?
            // transfer(address,uint256)
            .method(
                ContractMethod::function("transfer", false, false)
                    .append_input(AbiParam::new("address")?)
                    .append_input(AbiParam::new("uint256")?)
                    .append_output(AbiParam::new("bool")?),
            )?
            // transferFrom(address,address,uint256)
            .method(
                ContractMethod::function("transferFrom", false, false)
                    .append_input(AbiParam::new("address")?)
                    .append_input(AbiParam::new("address")?)
                    .append_input(AbiParam::new("uint256")?)
                    .append_output(AbiParam::new("bool")?),
            )?
            // approve(address,uint256)
            .method(
                ContractMethod::function("approve", false, false)
                    .append_input(AbiParam::new("address")?)
                    .append_input(AbiParam::new("uint256")?)
                    .append_output(AbiParam::new("bool")?),
            )?
            // allowance(address,address)
            .method(
                ContractMethod::function("allowance", true, false)
                    .append_input(AbiParam::new("address")?)
                    .append_input(AbiParam::new("address")?)
                    .append_output(AbiParam::new("uint256")?),
            )?
            // Events
            .event(
                ContractEvent::new("Transfer", false)
                    .append_input(AbiParam::event("address", "_from", true)?)
                    .append_input(AbiParam::event("address", "_to", true)?)
                    .append_input(AbiParam::event("uint256", "_value", false)?),
            )?
            .event(
                ContractEvent::new("Approval", false)
                    .append_input(AbiParam::event("address", "_owner", true)?)
                    .append_input(AbiParam::event("address", "_spender", true)?)
                    .append_input(AbiParam::event("uint256", "_value", false)?),
            )?
            .build();

        Ok(Self {
            name: contract.method_position("name")?,
            symbol: contract.method_position("symbol")?,
            decimals: contract.method_position("decimals")?,
            total_supply: contract.method_position("totalSupply")?,
            balance_of: contract.method_position("balanceOf")?,
            transfer: contract.method_position("transfer")?,
            transfer_from: contract.method_position("transferFrom")?,
            approve: contract.method_position("approve")?,
            allowance: contract.method_position("allowance")?,
            transfer_event: contract.event_position("Transfer")?,
            approval_event: contract.event_position("Approval")?,
            contract,
        })
    }

    /// The underlying generic table.
    pub const fn contract(&self) -> &ContractAbi {
        &self.contract
    }

    fn method_at(&self, position: usize) -> &ContractMethod {
        &self.contract.methods()[position]
    }

    pub fn name(&self) -> &ContractMethod {
        self.method_at(self.name)
    }

    pub fn symbol(&self) -> &ContractMethod {
        self.method_at(self.symbol)
    }

    pub fn decimals(&self) -> &ContractMethod {
        self.method_at(self.decimals)
    }

    pub fn total_supply(&self) -> &ContractMethod {
        self.method_at(self.total_supply)
    }

    pub fn balance_of(&self) -> &ContractMethod {
        self.method_at(self.balance_of)
    }

    pub fn transfer(&self) -> &ContractMethod {
        self.method_at(self.transfer)
    }

    pub fn transfer_from(&self) -> &ContractMethod {
        self.method_at(self.transfer_from)
    }

    pub fn approve(&self) -> &ContractMethod {
        self.method_at(self.approve)
    }

    pub fn allowance(&self) -> &ContractMethod {
        self.method_at(self.allowance)
    }

    pub fn transfer_event(&self) -> &ContractEvent {
        &self.contract.events()[self.transfer_event]
    }

    pub fn approval_event(&self) -> &ContractEvent {
        &self.contract.events()[self.approval_event]
    }
}

fn getter(name: &str, output: &str) -> Result<ContractMethod, AbiError> {
    Ok(ContractMethod::function(name, true, false).append_output(AbiParam::new(output)?))
}
