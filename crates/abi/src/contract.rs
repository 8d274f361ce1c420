//! Immutable contract ABI registry and its staged builder.

use crate::{AbiError, ContractEvent, ContractMethod, MethodKind};
use std::collections::HashMap;

/// Method and event table of one contract.
///
/// Built once through [`ContractAbiBuilder`]; there is no way to mutate a
/// finished table, so it can be shared freely behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ContractAbi {
    constructor: Option<ContractMethod>,
    methods: Vec<ContractMethod>,
    events: Vec<ContractEvent>,
    method_index: HashMap<String, usize>,
    signature_index: HashMap<String, usize>,
    event_index: HashMap<String, usize>,
}

impl ContractAbi {
    pub fn builder() -> ContractAbiBuilder {
        ContractAbiBuilder::default()
    }

    pub const fn constructor(&self) -> Option<&ContractMethod> {
        self.constructor.as_ref()
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> &[ContractMethod] {
        &self.methods
    }

    /// Events in declaration order.
    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    pub fn method(&self, name: &str) -> Option<&ContractMethod> {
        self.method_index.get(name).map(|&i| &self.methods[i])
    }

    /// Look up a method by canonical signature, e.g. `decimals()`.
    pub fn method_by_signature(&self, signature: &str) -> Option<&ContractMethod> {
        self.signature_index.get(signature).map(|&i| &self.methods[i])
    }

    pub fn event(&self, name: &str) -> Option<&ContractEvent> {
        self.event_index.get(name).map(|&i| &self.events[i])
    }

    pub(crate) fn method_position(&self, name: &str) -> Result<usize, AbiError> {
        self.method_index
            .get(name)
            .copied()
            .ok_or_else(|| AbiError::AbiAssembly(format!("method '{}' is not declared", name)))
    }

    pub(crate) fn event_position(&self, name: &str) -> Result<usize, AbiError> {
        self.event_index
            .get(name)
            .copied()
            .ok_or_else(|| AbiError::AbiAssembly(format!("event '{}' is not declared", name)))
    }
}

/// Staged builder for [`ContractAbi`].
#[derive(Debug, Default)]
pub struct ContractAbiBuilder {
    abi: ContractAbi,
}

impl ContractAbiBuilder {
    /// Append a function.
    pub fn method(mut self, method: ContractMethod) -> Result<Self, AbiError> {
        if method.kind() != MethodKind::Function {
            return Err(AbiError::AbiAssembly(
                "constructor must be declared with constructor()".to_string(),
            ));
        }
        if method.name().is_empty() {
            return Err(AbiError::AbiAssembly(
                "function name must not be empty".to_string(),
            ));
        }
        if self.abi.method_index.contains_key(method.name()) {
            return Err(AbiError::AbiAssembly(format!(
                "duplicate method '{}'",
                method.name()
            )));
        }

        let position = self.abi.methods.len();
        self.abi
            .method_index
            .insert(method.name().to_string(), position);
        self.abi.signature_index.insert(method.signature(), position);
        self.abi.methods.push(method);
        Ok(self)
    }

    /// Set the constructor.
    pub fn constructor(mut self, method: ContractMethod) -> Result<Self, AbiError> {
        if method.kind() != MethodKind::Constructor {
            return Err(AbiError::AbiAssembly(format!(
                "'{}' is not a constructor",
                method.name()
            )));
        }
        if self.abi.constructor.is_some() {
            return Err(AbiError::AbiAssembly(
                "constructor declared twice".to_string(),
            ));
        }

        self.abi.constructor = Some(method);
        Ok(self)
    }

    /// Append an event.
    pub fn event(mut self, event: ContractEvent) -> Result<Self, AbiError> {
        if event.name().is_empty() {
            return Err(AbiError::AbiAssembly(
                "event name must not be empty".to_string(),
            ));
        }
        if self.abi.event_index.contains_key(event.name()) {
            return Err(AbiError::AbiAssembly(format!(
                "duplicate event '{}'",
                event.name()
            )));
        }
        if event.indexed_count() > event.max_indexed() {
            return Err(AbiError::AbiAssembly(format!(
                "event '{}' has {} indexed inputs, at most {} allowed",
                event.name(),
                event.indexed_count(),
                event.max_indexed()
            )));
        }

        self.abi
            .event_index
            .insert(event.name().to_string(), self.abi.events.len());
        self.abi.events.push(event);
        Ok(self)
    }

    pub fn build(self) -> ContractAbi {
        self.abi
    }
}
