//! Event descriptors.

use crate::AbiParam;
use alloy_primitives::{keccak256, B256};

/// Maximum indexed inputs of a non-anonymous event. The signature hash
/// takes the first topic slot.
pub const MAX_INDEXED_INPUTS: usize = 3;

/// Maximum indexed inputs of an anonymous event.
pub const MAX_INDEXED_INPUTS_ANONYMOUS: usize = 4;

/// A named, typed contract event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractEvent {
    name: String,
    anonymous: bool,
    inputs: Vec<AbiParam>,
}

impl ContractEvent {
    /// Describe an event with no inputs yet.
    pub fn new(name: impl Into<String>, anonymous: bool) -> Self {
        Self {
            name: name.into(),
            anonymous,
            inputs: Vec::new(),
        }
    }

    /// Append an input parameter.
    pub fn append_input(mut self, param: AbiParam) -> Self {
        self.inputs.push(param);
        self
    }

    /// Event name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Anonymous events carry no signature topic.
    pub const fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    /// Input parameters in log order.
    pub fn inputs(&self) -> &[AbiParam] {
        &self.inputs
    }

    /// Number of indexed inputs.
    pub fn indexed_count(&self) -> usize {
        self.inputs.iter().filter(|p| p.is_indexed()).count()
    }

    /// Indexed input limit for this event.
    pub const fn max_indexed(&self) -> usize {
        if self.anonymous {
            MAX_INDEXED_INPUTS_ANONYMOUS
        } else {
            MAX_INDEXED_INPUTS
        }
    }

    /// Canonical signature, e.g. `Transfer(address,address,uint256)`.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self.inputs.iter().map(AbiParam::ty).collect();
        format!("{}({})", self.name, types.join(","))
    }

    /// First log topic identifying this event. Anonymous events have none.
    pub fn topic(&self) -> Option<B256> {
        (!self.anonymous).then(|| keccak256(self.signature()))
    }
}
